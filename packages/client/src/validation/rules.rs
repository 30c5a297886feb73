//! Reusable, parameterized validation rules and the typed checks behind them

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ValidationError;

/// Smallest index accepted for product, list, dimension, metric and promo slots.
pub const INDEX_MIN: i64 = 1;

/// Largest index accepted for product, list, dimension, metric and promo slots.
pub const INDEX_MAX: i64 = 200;

/// Constraint attached to a parameter value before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// UTF-8 encoded length must not exceed the given number of bytes
    MaxByteLength(usize),
    /// Numeric value must be zero or greater
    NonNegative,
    /// Integer value must lie in `lo..=hi`
    InRange { lo: i64, hi: i64 },
    /// Queue time in milliseconds, must be a non-negative duration
    QueueTime,
}

impl ValidationRule {
    /// Rule for a protocol index slot (`1..=200`).
    pub const INDEX: ValidationRule = ValidationRule::InRange {
        lo: INDEX_MIN,
        hi: INDEX_MAX,
    };

    /// Check `value` for the parameter named `field`.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` variant associated with this rule, or
    /// `NotNumeric` when a numeric rule is applied to text that is not a number.
    pub fn check(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        match *self {
            Self::MaxByteLength(limit) => check_size_of(field, value, limit),
            Self::NonNegative => {
                let number = parse_decimal(field, value)?;
                if number < Decimal::ZERO {
                    return Err(ValidationError::NegativeValue {
                        field: field.to_string(),
                        value: value.to_string(),
                    });
                }
                Ok(())
            }
            Self::InRange { lo, hi } => check_between(field, lo, hi, parse_integer(field, value)?),
            Self::QueueTime => check_queue_time(parse_integer(field, value)?),
        }
    }

    /// Apply every rule in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation encountered.
    pub fn check_all(rules: &[ValidationRule], field: &str, value: &str) -> Result<(), ValidationError> {
        rules.iter().try_for_each(|rule| rule.check(field, value))
    }
}

/// Reject `value` when its UTF-8 encoding is longer than `limit` bytes.
///
/// # Errors
///
/// Returns `ValidationError::MaxLengthExceeded` carrying the measured byte count.
pub fn check_size_of(field: &str, value: &str, limit: usize) -> Result<(), ValidationError> {
    let actual_bytes = value.len();
    if actual_bytes > limit {
        return Err(ValidationError::MaxLengthExceeded {
            field: field.to_string(),
            value: value.to_string(),
            limit,
            actual_bytes,
        });
    }
    Ok(())
}

/// Reject negative integers.
///
/// # Errors
///
/// Returns `ValidationError::NegativeValue` when `value < 0`.
pub fn check_not_negative(field: &str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Two-sided inclusive range check.
///
/// # Errors
///
/// Returns `ValidationError::OutOfBounds` unless `lo <= actual && actual <= hi`.
pub fn check_between(field: &str, lo: i64, hi: i64, actual: i64) -> Result<(), ValidationError> {
    if !(lo <= actual && actual <= hi) {
        return Err(ValidationError::OutOfBounds {
            field: field.to_string(),
            lo,
            hi,
            actual,
        });
    }
    Ok(())
}

/// Check a protocol index slot against `INDEX_MIN..=INDEX_MAX`.
///
/// # Errors
///
/// Returns `ValidationError::OutOfBounds` for indices outside the slot range.
pub fn check_index(field: &str, index: u32) -> Result<(), ValidationError> {
    check_between(field, INDEX_MIN, INDEX_MAX, i64::from(index))
}

/// Queue time is the elapsed time between the hit and its report; zero is allowed.
///
/// # Errors
///
/// Returns `ValidationError::InvalidQueueTime` for negative durations.
pub fn check_queue_time(queue_time_millis: i64) -> Result<(), ValidationError> {
    if queue_time_millis < 0 {
        return Err(ValidationError::InvalidQueueTime {
            value: queue_time_millis,
        });
    }
    Ok(())
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(value.trim()).map_err(|_| ValidationError::NotNumeric {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_integer(field: &str, value: &str) -> Result<i64, ValidationError> {
    value.trim().parse::<i64>().map_err(|_| ValidationError::NotNumeric {
        field: field.to_string(),
        value: value.to_string(),
    })
}
