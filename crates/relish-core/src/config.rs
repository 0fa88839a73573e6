//! Environment-driven hub configuration.

use std::env;

/// Override variables for the public base URL, in lookup order.
///
/// The mixed-case spelling predates the uppercase one and is still honoured.
pub const BASE_URL_ENV_VARS: [&str; 2] = ["RElish_BASE_URL", "RELISH_BASE_URL"];

/// Runtime configuration for the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubConfig {
    /// Public base URL for join links. When unset, the request's own
    /// scheme and host are used.
    pub base_url_override: Option<String>,
}

impl HubConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            base_url_override: base_url_from_env(),
        }
    }

    /// Replace the base URL override (e.g. from a CLI flag).
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.is_empty()) {
            self.base_url_override = Some(url);
        }
        self
    }
}

/// First non-empty value among [`BASE_URL_ENV_VARS`].
pub fn base_url_from_env() -> Option<String> {
    BASE_URL_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
}
