//! Centralized constants for the placemark crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// User-Agent sent with every request (required by the Nominatim usage policy)
    pub const USER_AGENT: &str = concat!("placemark/", env!("CARGO_PKG_VERSION"));

    /// Largest `limit` Nominatim accepts on /search
    pub const NOMINATIM_MAX_LIMIT: usize = 40;
}

/// Nominatim result categories (`category` in jsonv2 output)
pub mod category {
    /// Categories that describe addresses, streets, settlements or areas
    /// rather than a specific point of interest
    pub const NON_POI: &[&str] = &["place", "highway", "boundary", "building", "landuse"];
}
