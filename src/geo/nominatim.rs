//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Serves both completion and geocoding from the /search endpoint.
//! Rate limit: 1 request per second per the public usage policy; requests
//! are spaced by `min_interval_ms`. A completion still waiting for its slot
//! when a newer completion or a lookup arrives is dropped unsent.

use crate::config::ServiceConfig;
use crate::constants::api::NOMINATIM_MAX_LIMIT;
use crate::constants::category::NON_POI;
use crate::error::{Error, Result};
use crate::geo::{Geocoder, PlaceCompleter, Placemark, ResultFilter, Suggestion};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
    filter: ResultFilter,
    language: String,
    throttle: Arc<Throttle>,
}

/// Spaces out requests shared by every clone of a backend
#[derive(Debug)]
struct Throttle {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
    /// Number of the most recent completion or lookup
    latest: AtomicU64,
}

impl Throttle {
    fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Mutex::new(None),
            latest: AtomicU64::new(0),
        }
    }

    /// Wait for a completion slot
    ///
    /// Returns false, without using up a slot, once any later completion or
    /// lookup has been issued.
    async fn completion_turn(&self) -> bool {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.wait_turn(|| self.latest.load(Ordering::SeqCst) == ticket)
            .await
    }

    /// Wait for a lookup slot; completions still queued give up theirs
    async fn lookup_turn(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.wait_turn(|| true).await;
    }

    async fn wait_turn(&self, wanted: impl Fn() -> bool) -> bool {
        // Held across the sleep so concurrent callers queue up
        let mut last = self.last.lock().await;
        if !wanted() {
            return false;
        }
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
                if !wanted() {
                    return false;
                }
            }
        }
        *last = Some(Instant::now());
        true
    }
}

/// Nominatim search response item (format=jsonv2)
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    address: HashMap<String, String>,
}

impl NominatimPlace {
    fn is_point_of_interest(&self) -> bool {
        !NON_POI.contains(&self.category.as_str())
    }

    fn matches(&self, filter: ResultFilter) -> bool {
        match filter {
            ResultFilter::PointOfInterest => self.is_point_of_interest(),
            ResultFilter::Address => !self.is_point_of_interest(),
            ResultFilter::All => true,
        }
    }

    /// Title is the place's own name; subtitle is the display name after its
    /// first component
    fn to_suggestion(&self) -> Suggestion {
        let title = if self.name.is_empty() {
            self.display_name
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        } else {
            self.name.clone()
        };

        // The first component of display_name always names the place itself
        let subtitle = self
            .display_name
            .split_once(',')
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default()
            .to_string();

        Suggestion { title, subtitle }
    }

    fn address_field(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.address.get(*key))
            .cloned()
    }

    fn to_placemark(&self) -> Result<Placemark> {
        let (lat, lng) = NominatimBackend::parse_coords(&self.lat, &self.lon)?;

        Ok(Placemark {
            country: self.address_field(&["country"]),
            postal_code: self.address_field(&["postcode"]),
            administrative_area: self.address_field(&["state", "province", "region"]),
            locality: self.address_field(&[
                "city",
                "town",
                "village",
                "municipality",
                "city_district",
            ]),
            thoroughfare: self.address_field(&["road", "pedestrian"]),
            sub_thoroughfare: self.address_field(&["house_number"]),
            longitude: Some(lng),
            latitude: Some(lat),
        })
    }
}

impl NominatimBackend {
    /// Create a backend from the service settings
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.suggestion_limit.clamp(1, NOMINATIM_MAX_LIMIT),
            filter: config.result_filter()?,
            language: config.language.clone(),
            throttle: Arc::new(Throttle::new(config.min_interval())),
        })
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Result<(f64, f64)> {
        let lat: f64 = lat.parse().map_err(|_| {
            Error::Geocoding(format!("Invalid latitude: {}", lat))
        })?;
        let lng: f64 = lng.parse().map_err(|_| {
            Error::Geocoding(format!("Invalid longitude: {}", lng))
        })?;
        Ok((lat, lng))
    }

    /// Build a /search URL
    fn search_url(&self, query: &str, limit: usize) -> String {
        let mut url = format!(
            "{}/search?q={}&format=jsonv2&addressdetails=1&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        if !self.language.is_empty() {
            url.push_str(&format!("&accept-language={}", urlencoding::encode(&self.language)));
        }
        url
    }

    /// Over-fetch when filtering so that dropped results still leave a full list
    fn fetch_limit(&self) -> usize {
        match self.filter {
            ResultFilter::All => self.limit,
            _ => (self.limit * 3).min(NOMINATIM_MAX_LIMIT),
        }
    }

    /// Send one /search request; callers take a throttle turn first
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<NominatimPlace>> {
        let url = self.search_url(query, limit);
        debug!("Nominatim request: {}", url);

        let response = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))
    }

    fn suggestions_from(&self, places: &[NominatimPlace]) -> Vec<Suggestion> {
        places
            .iter()
            .filter(|place| place.matches(self.filter))
            .map(NominatimPlace::to_suggestion)
            .take(self.limit)
            .collect()
    }
}

impl PlaceCompleter for NominatimBackend {
    async fn complete(&self, fragment: &str) -> Result<Vec<Suggestion>> {
        if !self.throttle.completion_turn().await {
            debug!("Skipping superseded completion for {:?}", fragment);
            return Ok(Vec::new());
        }

        let places = self.search(fragment, self.fetch_limit()).await?;
        Ok(self.suggestions_from(&places))
    }
}

impl Geocoder for NominatimBackend {
    async fn geocode(&self, query: &str) -> Result<Option<Placemark>> {
        self.throttle.lookup_turn().await;
        let places = self.search(query, 1).await?;

        match places.first() {
            Some(place) => Ok(Some(place.to_placemark()?)),
            None => Ok(None),
        }
    }
}
