//! Core `QueryBuilder` structure and base functionality
//!
//! Contains the builder struct, its constructors, the raw parameter
//! passthrough and the helpers every field setter is written in terms of.

use hitq_client::catalogue::Index;
use hitq_client::config::CollectConfig;
use hitq_client::error::Result;
use hitq_client::executor::RequestExecutor;
use hitq_client::params::ParameterAccumulator;
use hitq_client::validation::{ValidationRule, check_not_negative};
use rust_decimal::Decimal;

/// Fluent builder for one measurement protocol hit.
///
/// Setters for unconstrained fields return `&mut Self`; setters for fields
/// with a protocol constraint return `Result<&mut Self>` and leave the
/// builder untouched when they fail. Both chain:
///
/// ```
/// use hitq::QueryBuilder;
///
/// let mut builder = QueryBuilder::with_endpoint("http://host/collect").unwrap();
/// builder
///     .with_v1()
///     .with_tid("UA-1-1")
///     .with_t_as_event()
///     .with_ec("video")?
///     .with_ev(42)?;
///
/// assert_eq!(
///     builder.escaped_uri(),
///     "http://host/collect?v=1&tid=UA-1-1&t=event&ec=video&ev=42"
/// );
/// # Ok::<(), hitq::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    /// Parameters of the hit being built
    pub(crate) accumulator: ParameterAccumulator,
    /// Posts the finished hit
    pub(crate) executor: RequestExecutor,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Start a hit for the default collect endpoint.
    ///
    /// Configuration comes from [`CollectConfig::default`]; use
    /// [`from_config`](Self::from_config) to honour environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&CollectConfig::default())
    }

    /// Start a hit for a custom endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - Absolute URL of the collect endpoint
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `endpoint` does not parse.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let accumulator = ParameterAccumulator::parse(endpoint)?;
        let config = CollectConfig::default().with_endpoint(accumulator.base().clone());
        Ok(Self {
            accumulator,
            executor: RequestExecutor::new(config),
        })
    }

    /// Start a hit posted through an existing executor.
    ///
    /// The executor's configured endpoint becomes the base URL, and its
    /// transport is shared rather than rebuilt.
    #[must_use]
    pub fn with_executor(executor: &RequestExecutor) -> Self {
        let config = executor.config();
        let mut accumulator = ParameterAccumulator::new(config.endpoint.clone());
        accumulator.set_debug(config.debug);
        Self {
            accumulator,
            executor: executor.clone(),
        }
    }

    /// Start a hit from explicit configuration.
    #[must_use]
    pub fn from_config(config: &CollectConfig) -> Self {
        Self::with_executor(&RequestExecutor::new(config.clone()))
    }

    /// Enable debug logging of parameter writes
    pub fn debug(&mut self) -> &mut Self {
        self.accumulator.set_debug(true);
        self
    }

    /// Insert or overwrite an arbitrary parameter.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `key` is empty.
    pub fn parameter(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<&mut Self> {
        self.accumulator.set_parameter(key, value)?;
        Ok(self)
    }

    /// Add another `key=value` pair even when `key` is already set.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `key` is empty.
    pub fn append_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.accumulator.append_parameter(key, value)?;
        Ok(self)
    }

    /// Drop every parameter set so far, keeping endpoint and executor.
    pub fn clear(&mut self) -> &mut Self {
        self.accumulator.clear();
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.accumulator.get(key)
    }

    #[must_use]
    pub fn accumulator(&self) -> &ParameterAccumulator {
        &self.accumulator
    }

    #[must_use]
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub(crate) fn put(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.accumulator.put(key, value);
        self
    }

    pub(crate) fn put_flag(&mut self, key: &'static str, value: bool) -> &mut Self {
        self.accumulator.put_flag(key, value);
        self
    }

    pub(crate) fn put_decimal(&mut self, key: &'static str, value: Decimal) -> &mut Self {
        self.accumulator.put_decimal(key, value);
        self
    }

    pub(crate) fn put_sized(
        &mut self,
        key: &'static str,
        field: &str,
        value: impl Into<String>,
        limit: usize,
    ) -> Result<&mut Self> {
        self.accumulator
            .set_validated_parameter(key, field, value, &[ValidationRule::MaxByteLength(limit)])?;
        Ok(self)
    }

    pub(crate) fn put_non_negative(&mut self, key: &'static str, field: &str, value: i64) -> Result<&mut Self> {
        check_not_negative(field, value)?;
        Ok(self.put(key, value.to_string()))
    }

    pub(crate) fn put_indexed(
        &mut self,
        template: &str,
        indices: &[Index],
        field: &str,
        value: impl Into<String>,
        rules: &[ValidationRule],
    ) -> Result<&mut Self> {
        self.accumulator
            .set_indexed_parameter(template, indices, field, value, rules)?;
        Ok(self)
    }
}

impl From<&CollectConfig> for QueryBuilder {
    fn from(config: &CollectConfig) -> Self {
        Self::from_config(config)
    }
}
