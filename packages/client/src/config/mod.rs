//! Collect client configuration
//!
//! Endpoint, on/off switch, timeouts and user agent, with presets,
//! environment overrides and validation.

pub mod defaults;
pub mod env;
pub mod types;
pub mod validation;

pub use defaults::{DEBUG_ENDPOINT, DEFAULT_ENDPOINT};
pub use env::{ENDPOINT_ENV, TRACKING_ENV};
pub use types::CollectConfig;
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
