//! Server shared state
//!
//! Holds configuration and the search session shared by all clients.

use crate::config::Config;
use crate::search::SearchHandle;
use std::time::{Duration, Instant};

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// The one search session this server drives
    pub search: SearchHandle,

    started: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, search: SearchHandle) -> Self {
        Self {
            config,
            search,
            started: Instant::now(),
        }
    }

    /// Time since the server started
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}
