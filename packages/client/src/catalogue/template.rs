//! Templated key expansion

use arrayvec::ArrayVec;

use crate::error::{self, Result};

/// Positional placeholder inside a templated key.
pub const PLACEHOLDER: &str = "{}";

/// Most indices any protocol template takes (`il{}pi{}cd{}`).
pub const MAX_INDICES: usize = 3;

/// A named positional index, e.g. the product slot of `pr{}id`.
///
/// The name is what validation errors report when the value is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index {
    pub name: &'static str,
    pub value: u32,
}

impl Index {
    #[must_use]
    pub const fn new(name: &'static str, value: u32) -> Self {
        Self { name, value }
    }

    #[must_use]
    pub const fn product(value: u32) -> Self {
        Self::new("productIndex", value)
    }

    #[must_use]
    pub const fn list(value: u32) -> Self {
        Self::new("listIndex", value)
    }

    #[must_use]
    pub const fn dimension(value: u32) -> Self {
        Self::new("dimensionIndex", value)
    }

    #[must_use]
    pub const fn metric(value: u32) -> Self {
        Self::new("metricIndex", value)
    }

    #[must_use]
    pub const fn promo(value: u32) -> Self {
        Self::new("promoIndex", value)
    }
}

/// Substitute `indices` into the `{}` placeholders of `template`, in order.
///
/// # Errors
///
/// Returns an invalid-argument error when no index is given, more than
/// [`MAX_INDICES`] are given, or the count does not match the placeholders.
///
/// # Examples
/// ```
/// use hitq_client::catalogue::{format_key, keys};
///
/// assert_eq!(format_key(keys::PR_N_ID, &[7]).unwrap(), "pr7id");
/// assert_eq!(format_key(keys::IL_X_PI_Y_CD_Z, &[1, 2, 3]).unwrap(), "il1pi2cd3");
/// ```
pub fn format_key(template: &str, indices: &[u32]) -> Result<String> {
    let placeholders = template.matches(PLACEHOLDER).count();
    if indices.is_empty() || indices.len() > MAX_INDICES || placeholders != indices.len() {
        return Err(error::invalid_argument(format!(
            "template {template} takes {placeholders} indices, got {}",
            indices.len()
        )));
    }

    let mut key = String::with_capacity(template.len() + indices.len() * 3);
    let mut rest = template;
    for index in indices {
        if let Some(at) = rest.find(PLACEHOLDER) {
            key.push_str(&rest[..at]);
            key.push_str(&index.to_string());
            rest = &rest[at + PLACEHOLDER.len()..];
        }
    }
    key.push_str(rest);
    Ok(key)
}

/// Collect the raw values of named indices, rejecting more than [`MAX_INDICES`].
///
/// # Errors
///
/// Returns an invalid-argument error when too many indices are supplied.
pub fn index_values(indices: &[Index]) -> Result<ArrayVec<u32, MAX_INDICES>> {
    let mut values = ArrayVec::new();
    for index in indices {
        values.try_push(index.value).map_err(|_| {
            error::invalid_argument(format!(
                "at most {MAX_INDICES} indices are supported, got {}",
                indices.len()
            ))
        })?;
    }
    Ok(values)
}
