//! Default values and presets for `CollectConfig`

use std::sync::LazyLock;
use std::time::Duration;

use url::Url;

use super::types::CollectConfig;

/// Production collection endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://www.google-analytics.com/collect";

/// Validation endpoint: answers with a report instead of recording the hit.
pub const DEBUG_ENDPOINT: &str = "https://www.google-analytics.com/debug/collect";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("hitq/", env!("CARGO_PKG_VERSION"));

// Both endpoints are compile-time literals, parsed once
static DEFAULT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_ENDPOINT).expect("built-in collect endpoint is a valid URL"));
static DEBUG_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEBUG_ENDPOINT).expect("built-in debug endpoint is a valid URL"));

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_URL.clone(),
            enabled: true,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            debug: false,
        }
    }
}

impl CollectConfig {
    /// Configuration that builds hits but never sends them.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Configuration targeting the validation endpoint with debug logging on.
    ///
    /// # Examples
    /// ```
    /// use hitq_client::config::CollectConfig;
    ///
    /// let config = CollectConfig::debug_endpoint();
    /// assert_eq!(config.endpoint.path(), "/debug/collect");
    /// assert!(config.debug);
    /// ```
    #[must_use]
    pub fn debug_endpoint() -> Self {
        Self {
            endpoint: DEBUG_URL.clone(),
            debug: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validator;

    #[test]
    fn builtin_presets_parse_and_validate() {
        let config = CollectConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());

        let debug = CollectConfig::debug_endpoint();
        assert_eq!(debug.endpoint.as_str(), DEBUG_ENDPOINT);
        assert!(debug.validate().is_ok());
    }
}
