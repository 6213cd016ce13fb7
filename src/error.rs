//! Error types for placemark

use thiserror::Error;

/// Main error type for placemark operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Search controller has shut down")]
    ControllerClosed,
}

/// Result type alias for placemark operations
pub type Result<T> = std::result::Result<T, Error>;
