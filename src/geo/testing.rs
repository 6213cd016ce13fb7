//! In-memory services for exercising the controller without a network

use crate::error::{Error, Result};
use crate::geo::{Geocoder, PlaceCompleter, Placemark, Suggestion};
use std::collections::HashMap;
use std::sync::Mutex;

/// Completer answering from a fixed table and recording each fragment it is asked for
#[derive(Debug, Default)]
pub(crate) struct FakeCompleter {
    responses: HashMap<String, Vec<Suggestion>>,
    calls: Mutex<Vec<String>>,
    failing: bool,
}

impl FakeCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, fragment: &str, suggestions: Vec<Suggestion>) -> Self {
        self.responses.insert(fragment.to_string(), suggestions);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlaceCompleter for FakeCompleter {
    async fn complete(&self, fragment: &str) -> Result<Vec<Suggestion>> {
        self.calls.lock().unwrap().push(fragment.to_string());
        if self.failing {
            return Err(Error::Geocoding("completion unavailable".to_string()));
        }
        Ok(self.responses.get(fragment).cloned().unwrap_or_default())
    }
}

/// Geocoder answering from a fixed table and recording each query
#[derive(Debug, Default)]
pub(crate) struct FakeGeocoder {
    responses: HashMap<String, Placemark>,
    calls: Mutex<Vec<String>>,
    failing: bool,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, query: &str, placemark: Placemark) -> Self {
        self.responses.insert(query.to_string(), placemark);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Geocoder for FakeGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<Placemark>> {
        self.calls.lock().unwrap().push(query.to_string());
        if self.failing {
            return Err(Error::Geocoding("geocoder unavailable".to_string()));
        }
        Ok(self.responses.get(query).cloned())
    }
}

/// The Tokyo Tower placemark used across tests
pub(crate) fn tokyo_tower() -> Placemark {
    Placemark {
        country: Some("Japan".to_string()),
        postal_code: Some("105-0011".to_string()),
        administrative_area: Some("Tokyo".to_string()),
        locality: Some("Minato".to_string()),
        thoroughfare: Some(String::new()),
        sub_thoroughfare: Some("4-2-8".to_string()),
        longitude: Some(139.7454),
        latitude: Some(35.6586),
    }
}

pub(crate) const TOKYO_TOWER_DETAIL: &str = concat!(
    "Country : Japan\n",
    "Postal code : 105-0011\n",
    "Administrative area : Tokyo\n",
    "Locality : Minato\n",
    "Thoroughfare : \n",
    "Sub-thoroughfare : 4-2-8\n",
    "Longitude : 139.7454\n",
    "Latitude : 35.6586",
);
