//! Configuration constants for the Funbox client.

use std::time::Duration;

/// Server the client loads jokes and quotes from
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Third-party random cat image endpoint
pub const DEFAULT_CAT_URL: &str = "https://cataas.com/cat";

/// Cosmetic pause before each generated result, in milliseconds
pub const GENERATE_DELAY_MS: u64 = 1000;

/// Timeout for every HTTP request the client makes, in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Smallest random number handed out
pub const NUMBER_MIN: u32 = 1;

/// Largest random number handed out
pub const NUMBER_MAX: u32 = 100;

/// Get the HTTP timeout as Duration
pub fn get_http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

/// Get the default generate delay as Duration
pub fn get_generate_delay() -> Duration {
    Duration::from_millis(GENERATE_DELAY_MS)
}
