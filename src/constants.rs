//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "routescope";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Well-known discovery path appended to a site URL for remote ingestion
pub const DISCOVERY_PATH: &str = "/wp-json";

/// Title used when the API description carries no name
pub const DEFAULT_API_NAME: &str = "WordPress REST API";

/// Timezone label used when the API description carries none
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Maximum number of request history records kept
pub const MAX_HISTORY: usize = 50;

/// Default request timeout for the tester, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under the home directory holding persisted state
pub const DATA_DIR_NAME: &str = ".routescope";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ROUTESCOPE_DATA_DIR";

/// Log file written inside the data directory
pub const LOG_FILE_NAME: &str = "routescope.log";

/// Method filter choices offered by the explorer, in cycling order
pub const FILTER_METHODS: [&str; 6] = ["ALL", "GET", "POST", "PUT", "PATCH", "DELETE"];

/// Sentinel meaning "no restriction" in method and namespace filters
pub const ALL: &str = "ALL";
