//! Configuration
//!
//! Client settings read from browser local storage, with defaults for
//! anything missing or unparseable.

use std::str::FromStr;

use crate::state::status::STATUS_TIMEOUT_MS;

/// Local storage key for the API base URL
pub const API_URL_KEY: &str = "roster_api_url";
/// Local storage key for the status message timeout
pub const STATUS_TIMEOUT_KEY: &str = "roster_status_timeout_ms";
/// Local storage key for the console log level
pub const LOG_LEVEL_KEY: &str = "roster_log_level";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    /// How long a status message stays visible
    pub status_timeout_ms: u32,
    pub log_level: log::Level,
}

fn default_api_base() -> String {
    String::new()
}

fn default_status_timeout() -> u32 {
    STATUS_TIMEOUT_MS
}

fn default_log_level() -> log::Level {
    log::Level::Info
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            status_timeout_ms: default_status_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Build a config from a key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup(API_URL_KEY)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(default_api_base);

        let status_timeout_ms = lookup(STATUS_TIMEOUT_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(default_status_timeout);

        let log_level = lookup(LOG_LEVEL_KEY)
            .and_then(|raw| log::Level::from_str(raw.trim()).ok())
            .unwrap_or_else(default_log_level);

        Self {
            api_base,
            status_timeout_ms,
            log_level,
        }
    }

    /// Load from `window.localStorage`, falling back to defaults when storage
    /// is unavailable
    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());

        match storage {
            Some(storage) => Self::from_lookup(|key| storage.get_item(key).ok().flatten()),
            None => Self::default(),
        }
    }
}
