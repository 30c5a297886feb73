//! Configuration validation

use std::time::Duration;

use url::Url;

use super::types::CollectConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid collect endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

impl From<ConfigurationError> for crate::error::Error {
    fn from(err: ConfigurationError) -> Self {
        crate::error::configuration(err)
    }
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidTimeout` - if timeout values are zero or exceed limits
    /// - `InvalidEndpoint` - if the endpoint is not an http(s) URL with a host
    /// - `InvalidParameter` - if other settings are unusable
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate timeout duration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if:
    /// - The timeout duration is zero
    /// - The timeout duration exceeds 1 hour (3600 seconds)
    pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot be zero"
            )));
        }

        if timeout.as_secs() > 3600 {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot exceed 1 hour"
            )));
        }

        Ok(())
    }

    /// Validate the collection endpoint
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidEndpoint` unless the URL uses
    /// `http` or `https` and names a host.
    pub fn validate_endpoint(endpoint: &Url) -> ConfigResult<()> {
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidEndpoint(format!(
                "{endpoint} must use http or https"
            )));
        }

        if endpoint.host_str().is_none_or(str::is_empty) {
            return Err(ConfigurationError::InvalidEndpoint(format!(
                "{endpoint} has no host"
            )));
        }

        Ok(())
    }
}

impl Validator for CollectConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_endpoint(&self.endpoint)?;
        ConfigValidator::validate_timeout(self.timeout, "timeout")?;
        ConfigValidator::validate_timeout(self.connect_timeout, "connect_timeout")?;

        if self.connect_timeout > self.timeout {
            return Err(ConfigurationError::InvalidTimeout(
                "connect_timeout cannot exceed timeout".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigurationError::InvalidParameter(
                "user_agent cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
