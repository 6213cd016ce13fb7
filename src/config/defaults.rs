//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::{NOMINATIM_URL, USER_AGENT};

/// Default geocoding service base URL
pub const DEFAULT_BASE_URL: &str = NOMINATIM_URL;

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = USER_AGENT;

/// Default number of suggestions shown while typing
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Default suggestion filter (points of interest only)
pub const DEFAULT_RESULT_FILTER: &str = "poi";

/// Minimum delay between two requests to the geocoding service
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 1000;

/// Default label set for the detail view
pub const DEFAULT_LABELS: &str = "en";

/// Default output format for one-shot lookups
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "placemark";
