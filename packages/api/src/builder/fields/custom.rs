//! Custom dimensions, custom metrics and content experiments

use hitq_client::catalogue::{Index, keys, limits};
use hitq_client::error::Result;
use rust_decimal::Decimal;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// Custom dimension (`cd{N}`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `dimension_index` is outside `1..=200`.
    pub fn with_cd_x(&mut self, dimension_index: u32, custom_dimension: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(
            keys::CD_N,
            &[Index::dimension(dimension_index)],
            "customDimension",
            custom_dimension,
            &[],
        )
    }

    /// Custom metric (`cm{N}`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `metric_index` is outside `1..=200`.
    pub fn with_cm_x(&mut self, metric_index: u32, custom_metric: impl Into<Decimal>) -> Result<&mut Self> {
        self.put_indexed(
            keys::CM_N,
            &[Index::metric(metric_index)],
            "customMetric",
            custom_metric.into().to_string(),
            &[],
        )
    }

    /// Experiment id (`xid`), at most 40 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_xid(&mut self, experiment_id: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::XID, "experimentID", experiment_id, limits::XID)
    }

    /// Experiment variant (`xvar`).
    pub fn with_xvar(&mut self, experiment_variant: impl Into<String>) -> &mut Self {
        self.put(keys::XVAR, experiment_variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_metric_keeps_numeric_form() {
        let mut qb = QueryBuilder::with_endpoint("http://host/collect").unwrap();
        qb.with_cm_x(1, 47).unwrap();
        qb.with_cm_x(2, Decimal::new(2850, 2)).unwrap();
        qb.with_cd_x(200, "Sports").unwrap();
        assert_eq!(qb.query_string(), "cm1=47&cm2=28.50&cd200=Sports");
        assert!(qb.with_cd_x(0, "x").unwrap_err().is_validation());
    }
}
