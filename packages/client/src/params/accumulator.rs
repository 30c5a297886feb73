//! Validated parameter accumulation for a single hit

use rust_decimal::Decimal;
use url::Url;

use super::encode::{build_url, encode_query};
use super::set::ParameterSet;
use crate::catalogue::{Index, format_key, index_values};
use crate::error::{self, Result};
use crate::validation::{ValidationRule, check_index};

/// Protocol encoding of a boolean field.
#[inline]
#[must_use]
pub fn as_flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// The in-progress parameters of one hit, bound to a base endpoint.
///
/// Every setter validates before it mutates: a rejected value leaves the
/// accumulator exactly as it was. State survives [`build`](Self::build), so a
/// reused accumulator keeps adding to the same hit until [`clear`](Self::clear).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterAccumulator {
    base: Url,
    parameters: ParameterSet,
    debug_enabled: bool,
}

impl ParameterAccumulator {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            base,
            parameters: ParameterSet::new(),
            debug_enabled: false,
        }
    }

    /// Bind a new accumulator to the endpoint given as text.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `base` is not an absolute URL.
    pub fn parse(base: &str) -> Result<Self> {
        let url = Url::parse(base).map_err(|e| {
            error::invalid_argument(format!("invalid endpoint '{base}': {e}")).with(e)
        })?;
        Ok(Self::new(url))
    }

    /// Log every accepted write at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
    }

    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    #[must_use]
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Store a catalogue key that needs no validation.
    pub fn put(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        debug_assert!(!key.is_empty(), "catalogue keys are never empty");
        self.write(key.to_string(), value.into());
        self
    }

    /// Store a boolean as `1` or `0`.
    pub fn put_flag(&mut self, key: &'static str, value: bool) -> &mut Self {
        self.put(key, as_flag(value))
    }

    /// Store a decimal amount verbatim; the scale given by the caller is kept.
    pub fn put_decimal(&mut self, key: &'static str, value: Decimal) -> &mut Self {
        self.put(key, value.to_string())
    }

    /// Insert or overwrite `key`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `key` is empty.
    pub fn set_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let key = non_empty(key.into())?;
        self.write(key, value.into());
        Ok(self)
    }

    /// Add a `key=value` pair even if `key` is already present.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `key` is empty.
    pub fn append_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let key = non_empty(key.into())?;
        let value = value.into();
        if self.debug_enabled {
            log::debug!("hitq: append {key}={value}");
        }
        self.parameters.append(key, value);
        Ok(self)
    }

    /// Check `value` against `rules`, then insert or overwrite `key`.
    ///
    /// # Arguments
    /// * `key` - Protocol key, already expanded
    /// * `field` - Human-readable field name reported by validation errors
    /// * `value` - Value to store
    /// * `rules` - Checked in order, the first violation wins
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for an empty key, or a validation
    /// error for the first rule `value` violates. State is unchanged on error.
    pub fn set_validated_parameter(
        &mut self,
        key: impl Into<String>,
        field: &str,
        value: impl Into<String>,
        rules: &[ValidationRule],
    ) -> Result<&mut Self> {
        let key = non_empty(key.into())?;
        let value = value.into();
        if let Err(err) = ValidationRule::check_all(rules, field, &value) {
            log::warn!("hitq: rejected {field} for key {key}: {err}");
            return Err(err.into());
        }
        self.write(key, value);
        Ok(self)
    }

    /// Expand a templated key and store a validated value under it.
    ///
    /// Each index is range-checked to `1..=200` in the order given, before the
    /// value rules run.
    ///
    /// # Examples
    /// ```
    /// use hitq_client::catalogue::{Index, keys, limits};
    /// use hitq_client::params::ParameterAccumulator;
    /// use hitq_client::validation::ValidationRule;
    ///
    /// let mut acc = ParameterAccumulator::parse("http://host/collect").unwrap();
    /// acc.set_indexed_parameter(
    ///     keys::PR_N_ID,
    ///     &[Index::product(7)],
    ///     "value",
    ///     "SKU1",
    ///     &[ValidationRule::MaxByteLength(limits::PRODUCT_TEXT)],
    /// )
    /// .unwrap();
    /// assert_eq!(acc.escaped_uri(), "http://host/collect?pr7id=SKU1");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range index or a rejected
    /// value, and an invalid-argument error when the index count does not fit
    /// the template.
    pub fn set_indexed_parameter(
        &mut self,
        template: &str,
        indices: &[Index],
        field: &str,
        value: impl Into<String>,
        rules: &[ValidationRule],
    ) -> Result<&mut Self> {
        for index in indices {
            if let Err(err) = check_index(index.name, index.value) {
                log::warn!("hitq: rejected {} for template {template}: {err}", index.name);
                return Err(err.into());
            }
        }
        let key = format_key(template, &index_values(indices)?)?;
        self.set_validated_parameter(key, field, value, rules)
    }

    /// Drop every parameter, keeping the base endpoint.
    pub fn clear(&mut self) -> &mut Self {
        self.parameters.clear();
        self
    }

    /// Percent-encoded query string in insertion order.
    #[must_use]
    pub fn query_string(&self) -> String {
        encode_query(&self.parameters)
    }

    /// Base endpoint with the accumulated query appended.
    #[must_use]
    pub fn build(&self) -> Url {
        build_url(&self.base, &self.parameters)
    }

    /// String form of [`build`](Self::build), for inspection without I/O.
    #[must_use]
    pub fn escaped_uri(&self) -> String {
        self.build().into()
    }

    fn write(&mut self, key: String, value: String) {
        if self.debug_enabled {
            log::debug!("hitq: set {key}={value}");
        }
        self.parameters.set(key, value);
    }
}

fn non_empty(key: String) -> Result<String> {
    if key.is_empty() {
        return Err(error::invalid_argument("parameter key cannot be empty"));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::catalogue::{keys, limits};
    use crate::validation::ValidationError;

    fn accumulator() -> ParameterAccumulator {
        ParameterAccumulator::parse("http://host/collect").expect("valid endpoint")
    }

    #[test]
    fn single_parameter_uri() {
        let mut acc = accumulator();
        acc.set_parameter("aid", "123").unwrap();
        assert_eq!(acc.escaped_uri(), "http://host/collect?aid=123");
    }

    #[test]
    fn call_order_is_query_order() {
        let mut acc = accumulator();
        acc.put(keys::V, "1").put(keys::TID, "UA-1-1");
        assert_eq!(acc.escaped_uri(), "http://host/collect?v=1&tid=UA-1-1");
        assert_eq!(acc.query_string(), "v=1&tid=UA-1-1");
    }

    #[test]
    fn empty_key_is_invalid_argument() {
        let mut acc = accumulator();
        assert!(acc.set_parameter("", "x").unwrap_err().is_invalid_argument());
        assert!(acc.append_parameter("", "x").unwrap_err().is_invalid_argument());
        assert!(acc.is_empty());
    }

    #[test]
    fn flags_are_one_and_zero() {
        assert_eq!(as_flag(true), "1");
        assert_eq!(as_flag(false), "0");

        let mut acc = accumulator();
        acc.put_flag(keys::AIP, true).put_flag(keys::JE, false);
        assert_eq!(acc.query_string(), "aip=1&je=0");
    }

    #[test]
    fn decimals_keep_caller_scale() {
        let mut acc = accumulator();
        acc.put_decimal(keys::TR, Decimal::from_str("15.470").unwrap())
            .put_decimal(keys::TT, Decimal::from_str("0.00").unwrap());
        assert_eq!(acc.get(keys::TR), Some("15.470"));
        assert_eq!(acc.get(keys::TT), Some("0.00"));
    }

    #[test]
    fn failed_validation_leaves_state_untouched() {
        let mut acc = accumulator();
        acc.put(keys::V, "1");
        let before = acc.clone();
        let too_long = "X".repeat(limits::AID + 1);
        let rules = [ValidationRule::MaxByteLength(limits::AID)];

        let first = acc
            .set_validated_parameter(keys::AID, "applicationID", too_long.clone(), &rules)
            .unwrap_err();
        let second = acc
            .set_validated_parameter(keys::AID, "applicationID", too_long, &rules)
            .unwrap_err();

        assert_eq!(first.validation(), second.validation());
        assert!(matches!(
            first.validation(),
            Some(ValidationError::MaxLengthExceeded { limit: 150, actual_bytes: 151, .. })
        ));
        assert_eq!(acc, before);
    }

    #[test]
    fn indexed_keys_are_range_checked_before_mutation() {
        let mut acc = accumulator();
        acc.set_indexed_parameter(
            keys::IL_X_PI_Y_CD_Z,
            &[Index::list(1), Index::product(2), Index::dimension(3)],
            "productImpressionCustomDimension",
            "Member",
            &[],
        )
        .unwrap();
        assert_eq!(acc.query_string(), "il1pi2cd3=Member");

        let before = acc.clone();
        let err = acc
            .set_indexed_parameter(
                keys::IL_X_PI_Y_CD_Z,
                &[Index::list(1), Index::product(201), Index::dimension(0)],
                "productImpressionCustomDimension",
                "Member",
                &[],
            )
            .unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::OutOfBounds {
                field: "productIndex".to_string(),
                lo: 1,
                hi: 200,
                actual: 201,
            })
        );
        assert_eq!(acc, before);
    }

    #[test]
    fn wrong_index_count_is_invalid_argument() {
        let mut acc = accumulator();
        let err = acc
            .set_indexed_parameter(keys::PR_X_CD_Y, &[Index::product(1)], "value", "x", &[])
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(acc.is_empty());
    }

    #[test]
    fn reuse_accumulates_until_cleared() {
        let mut acc = accumulator();
        acc.put(keys::T, "event");
        let first = acc.build();
        acc.put(keys::EC, "video");
        assert_eq!(first.as_str(), "http://host/collect?t=event");
        assert_eq!(acc.escaped_uri(), "http://host/collect?t=event&ec=video");

        acc.clear();
        assert_eq!(acc.escaped_uri(), "http://host/collect");
    }
}
