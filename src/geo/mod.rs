//! Geocoding module
//!
//! Provides place-name completion and forward geocoding.

pub mod nominatim;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::ServiceConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A completion candidate shown while the user types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Place name
    pub title: String,
    /// Context such as district or region
    pub subtitle: String,
}

impl Suggestion {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Structured result of forward geocoding
///
/// Every field is optional; providers fill in what they know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub country: Option<String>,
    pub postal_code: Option<String>,
    /// State, prefecture or province
    pub administrative_area: Option<String>,
    /// City, town or ward
    pub locality: Option<String>,
    /// Street name
    pub thoroughfare: Option<String>,
    /// House or block number
    pub sub_thoroughfare: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

/// Which kinds of places the completer offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultFilter {
    /// Named points of interest only (no plain streets, settlements or areas)
    #[default]
    PointOfInterest,
    /// Streets, addresses and settlements only
    Address,
    /// Everything the provider returns
    All,
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultFilter::PointOfInterest => write!(f, "poi"),
            ResultFilter::Address => write!(f, "address"),
            ResultFilter::All => write!(f, "all"),
        }
    }
}

impl FromStr for ResultFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poi" | "point_of_interest" => Ok(ResultFilter::PointOfInterest),
            "address" => Ok(ResultFilter::Address),
            "all" => Ok(ResultFilter::All),
            _ => Err(format!("Unknown result filter: {} (expected poi, address or all)", s)),
        }
    }
}

/// Incremental place-name completion
pub trait PlaceCompleter: Send + Sync {
    /// Suggestions for a partially typed place name, in provider order
    fn complete(&self, fragment: &str) -> impl std::future::Future<Output = Result<Vec<Suggestion>>> + Send;
}

/// Forward geocoding
pub trait Geocoder: Send + Sync {
    /// Resolve a place name to its best match, or None if nothing matched
    fn geocode(&self, query: &str) -> impl std::future::Future<Output = Result<Option<Placemark>>> + Send;
}

/// Build the geocoding backend described by the service config
pub fn get_backend(config: &ServiceConfig) -> Result<nominatim::NominatimBackend> {
    nominatim::NominatimBackend::new(config)
}
