//! Output formatters
//!
//! Renders placemarks for display, either as the labeled detail text shown
//! on screen or as JSON.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::geo::Placemark;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label language for the detail text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSet {
    #[default]
    English,
    Japanese,
}

impl LabelSet {
    /// Labels for the eight detail fields, in display order
    pub fn labels(&self) -> [&'static str; 8] {
        match self {
            LabelSet::English => [
                "Country",
                "Postal code",
                "Administrative area",
                "Locality",
                "Thoroughfare",
                "Sub-thoroughfare",
                "Longitude",
                "Latitude",
            ],
            LabelSet::Japanese => [
                "国",
                "郵便番号",
                "都道府県",
                "市区町村",
                "地名",
                "番地",
                "経度",
                "緯度",
            ],
        }
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSet::English => write!(f, "en"),
            LabelSet::Japanese => write!(f, "ja"),
        }
    }
}

impl FromStr for LabelSet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(LabelSet::English),
            "ja" | "japanese" => Ok(LabelSet::Japanese),
            _ => Err(format!("Unknown label set: {} (expected en or ja)", s)),
        }
    }
}

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a geocoded placemark
    fn format(&self, placemark: &Placemark, labels: LabelSet) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    let formatters: [Box<dyn OutputFormatter>; 2] =
        [Box::new(text::TextFormatter), Box::new(json::JsonFormatter)];

    formatters
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        assert!(formats.iter().any(|f| f.name == "json"));
        assert!(formats.iter().any(|f| f.name == "text"));
    }

    #[test]
    fn test_label_set_parse() {
        assert_eq!("en".parse::<LabelSet>().unwrap(), LabelSet::English);
        assert_eq!("Japanese".parse::<LabelSet>().unwrap(), LabelSet::Japanese);
        assert!("fr".parse::<LabelSet>().is_err());
    }

    #[test]
    fn test_label_order() {
        let labels = LabelSet::Japanese.labels();
        assert_eq!(labels[0], "国");
        assert_eq!(labels[7], "緯度");
        assert_eq!(LabelSet::English.labels()[6], "Longitude");
    }
}
