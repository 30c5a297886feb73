//! Transaction and item fields
//!
//! Amounts come in two forms: a `Decimal` setter that stores the canonical
//! string with the caller's scale, and a `_raw` setter that stores the text
//! as given.

use hitq_client::catalogue::{keys, limits};
use hitq_client::error::Result;
use rust_decimal::Decimal;

use crate::builder::core::QueryBuilder;

impl QueryBuilder {
    /// Transaction id (`ti`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ti(&mut self, transaction_id: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::TI, "transactionID", transaction_id, limits::TI)
    }

    /// Transaction affiliation (`ta`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ta(&mut self, transaction_affiliation: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::TA, "transactionAffiliation", transaction_affiliation, limits::TA)
    }

    /// Transaction revenue (`tr`), shipping and tax included.
    pub fn with_tr(&mut self, transaction_revenue: Decimal) -> &mut Self {
        self.put_decimal(keys::TR, transaction_revenue)
    }

    pub fn with_tr_raw(&mut self, transaction_revenue: impl Into<String>) -> &mut Self {
        self.put(keys::TR, transaction_revenue)
    }

    /// Transaction shipping (`ts`).
    pub fn with_ts(&mut self, shipping: Decimal) -> &mut Self {
        self.put_decimal(keys::TS, shipping)
    }

    pub fn with_ts_raw(&mut self, shipping: impl Into<String>) -> &mut Self {
        self.put(keys::TS, shipping)
    }

    /// Transaction tax (`tt`).
    pub fn with_tt(&mut self, transaction_tax: Decimal) -> &mut Self {
        self.put_decimal(keys::TT, transaction_tax)
    }

    pub fn with_tt_raw(&mut self, transaction_tax: impl Into<String>) -> &mut Self {
        self.put(keys::TT, transaction_tax)
    }

    /// Item name (`in`), at most 500 bytes. Required for item hits.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_in(&mut self, item_name: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::IN, "itemName", item_name, limits::IN)
    }

    /// Item price (`ip`) per unit.
    pub fn with_ip(&mut self, item_price: Decimal) -> &mut Self {
        self.put_decimal(keys::IP, item_price)
    }

    pub fn with_ip_raw(&mut self, item_price: impl Into<String>) -> &mut Self {
        self.put(keys::IP, item_price)
    }

    /// Item quantity (`iq`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative quantity.
    pub fn with_iq(&mut self, item_quantity: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::IQ, "itemQuantity", item_quantity)
    }

    pub fn with_iq_raw(&mut self, item_quantity: impl Into<String>) -> &mut Self {
        self.put(keys::IQ, item_quantity)
    }

    /// Item code or SKU (`ic`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_ic(&mut self, item_code: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::IC, "itemCode", item_code, limits::IC)
    }

    /// Item category or variation (`iv`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_iv(&mut self, item_category: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::IV, "itemCategory", item_category, limits::IV)
    }

    /// Currency code (`cu`), ISO 4217, at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `MaxLengthExceeded` when the value is too long.
    pub fn with_cu(&mut self, currency_code: impl Into<String>) -> Result<&mut Self> {
        self.put_sized(keys::CU, "currencyCode", currency_code, limits::CU)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn amounts_are_stored_verbatim() {
        let mut qb = QueryBuilder::with_endpoint("http://host/collect").unwrap();
        qb.with_tr(Decimal::from_str("15.470").unwrap())
            .with_tt(Decimal::new(1120, 2))
            .with_ts_raw("3.50 EUR");
        assert_eq!(qb.query_string(), "tr=15.470&tt=11.20&ts=3.50+EUR");
    }

    #[test]
    fn item_quantity_rejects_negative() {
        let mut qb = QueryBuilder::with_endpoint("http://host/collect").unwrap();
        assert!(qb.with_iq(-1).unwrap_err().is_validation());
        qb.with_iq(0).unwrap();
        assert_eq!(qb.get(keys::IQ), Some("0"));
    }
}
