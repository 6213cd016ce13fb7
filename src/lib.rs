//! placemark: Place Name Lookup
//!
//! A library and CLI tool that suggests place names as you type and resolves
//! the chosen one to its address components and coordinates, backed by
//! OpenStreetMap Nominatim.
//!
//! ## Features
//!
//! - Incremental completion restricted to points of interest (configurable)
//! - Forward geocoding to country, postal code, region, locality, street,
//!   house number and coordinates
//! - A search session that serializes all state changes on one task
//! - Interactive terminal screen, one-shot CLI commands and an HTTP API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use placemark::config::ServiceConfig;
//! use placemark::format::LabelSet;
//! use placemark::geo::nominatim::NominatimBackend;
//! use placemark::search;
//! use std::sync::Arc;
//!
//! # async fn demo() -> placemark::Result<()> {
//! let backend = Arc::new(NominatimBackend::new(&ServiceConfig::default())?);
//! let session = search::spawn(backend.clone(), backend, LabelSet::English);
//!
//! // Type a place name and wait for suggestions
//! session.set_query("Tokyo Tower")?;
//! let state = session.wait_for(|s| !s.suggestions.is_empty()).await?;
//!
//! // Pick the first one and wait for the lookup to finish
//! session.select(state.suggestions[0].clone())?;
//! let state = session.wait_for(|s| s.status.is_settled()).await?;
//! println!("{}", state.detail_text());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod search;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Placemark, Suggestion};
pub use search::{SearchHandle, SearchState};
