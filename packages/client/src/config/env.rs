//! Environment overrides
//!
//! `GOOGLE_ANALYTICS_TRACKING=false` turns sending off and `HITQ_ENDPOINT`
//! replaces the collection endpoint.

use url::Url;

use super::types::CollectConfig;
use super::validation::{ConfigResult, ConfigurationError, Validator};

/// Set to `false` (or `0`, `off`, `no`) to disable sending.
pub const TRACKING_ENV: &str = "GOOGLE_ANALYTICS_TRACKING";

/// Absolute URL replacing the default collection endpoint.
pub const ENDPOINT_ENV: &str = "HITQ_ENDPOINT";

impl CollectConfig {
    /// Default configuration with overrides read from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` when a variable holds an unusable value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unrecognized tracking flag and
    /// `InvalidEndpoint` for an endpoint that fails to parse or validate.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(flag) = lookup(TRACKING_ENV) {
            config.enabled = parse_flag(&flag).ok_or_else(|| {
                ConfigurationError::InvalidParameter(format!("{TRACKING_ENV}={flag}"))
            })?;
        }

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            config.endpoint = Url::parse(endpoint.trim()).map_err(|e| {
                ConfigurationError::InvalidEndpoint(format!("{ENDPOINT_ENV}={endpoint}: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
