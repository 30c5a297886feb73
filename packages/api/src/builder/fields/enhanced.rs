//! Enhanced ecommerce fields: products, product actions, impressions and
//! promotions.
//!
//! All indices are 1-based and must lie in `1..=200`; an out-of-range index
//! fails before anything is stored.

use hitq_client::catalogue::{Index, ProductAction, keys, limits};
use hitq_client::error::Result;
use hitq_client::validation::ValidationRule;
use rust_decimal::Decimal;

use crate::builder::core::QueryBuilder;

const PRODUCT_TEXT: &[ValidationRule] = &[ValidationRule::MaxByteLength(limits::PRODUCT_TEXT)];
const NON_NEGATIVE: &[ValidationRule] = &[ValidationRule::NonNegative];

impl QueryBuilder {
    /// Product SKU (`pr{N}id`), at most 500 bytes.
    ///
    /// # Arguments
    /// * `product_index` - Product slot, `1..=200`
    /// * `value` - SKU
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad index and `MaxLengthExceeded` for a
    /// value over the ceiling.
    pub fn with_pr_n_id(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_ID, &[Index::product(product_index)], "value", value, PRODUCT_TEXT)
    }

    /// Product name (`pr{N}nm`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `MaxLengthExceeded`.
    pub fn with_pr_n_nm(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_NM, &[Index::product(product_index)], "value", value, PRODUCT_TEXT)
    }

    /// Product brand (`pr{N}br`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `MaxLengthExceeded`.
    pub fn with_pr_n_br(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_BR, &[Index::product(product_index)], "value", value, PRODUCT_TEXT)
    }

    /// Product category (`pr{N}ca`), at most 500 bytes. Up to five levels
    /// separated by `/`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `MaxLengthExceeded`.
    pub fn with_pr_n_ca(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_CA, &[Index::product(product_index)], "value", value, PRODUCT_TEXT)
    }

    /// Product variant (`pr{N}va`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `MaxLengthExceeded`.
    pub fn with_pr_n_va(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_VA, &[Index::product(product_index)], "value", value, PRODUCT_TEXT)
    }

    /// Product price (`pr{N}pr`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad index.
    pub fn with_pr_n_pr(&mut self, product_index: u32, value: Decimal) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_PR, &[Index::product(product_index)], "value", value.to_string(), &[])
    }

    /// Product price (`pr{N}pr`) as given.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad index.
    pub fn with_pr_n_pr_raw(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_PR, &[Index::product(product_index)], "value", value, &[])
    }

    /// Product quantity (`pr{N}qt`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad index and `NegativeValue` for a
    /// negative quantity.
    pub fn with_pr_n_qt(&mut self, product_index: u32, value: i64) -> Result<&mut Self> {
        self.put_indexed(
            keys::PR_N_QT,
            &[Index::product(product_index)],
            "value",
            value.to_string(),
            NON_NEGATIVE,
        )
    }

    /// Product quantity (`pr{N}qt`) as given.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad index.
    pub fn with_pr_n_qt_raw(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_QT, &[Index::product(product_index)], "value", value, &[])
    }

    /// Product coupon code (`pr{N}cc`), at most 500 bytes.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `MaxLengthExceeded`.
    pub fn with_pr_n_cc(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_CC, &[Index::product(product_index)], "value", value, PRODUCT_TEXT)
    }

    /// Numeric product coupon code (`pr{N}cc`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `NegativeValue`.
    pub fn with_pr_n_cc_int(&mut self, product_index: u32, value: i64) -> Result<&mut Self> {
        self.put_indexed(
            keys::PR_N_CC,
            &[Index::product(product_index)],
            "value",
            value.to_string(),
            NON_NEGATIVE,
        )
    }

    /// Product position in a list (`pr{N}ps`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `NegativeValue`.
    pub fn with_pr_n_ps(&mut self, product_index: u32, value: i64) -> Result<&mut Self> {
        self.put_indexed(
            keys::PR_N_PS,
            &[Index::product(product_index)],
            "value",
            value.to_string(),
            NON_NEGATIVE,
        )
    }

    /// Product position (`pr{N}ps`) as given.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad index.
    pub fn with_pr_n_ps_raw(&mut self, product_index: u32, value: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(keys::PR_N_PS, &[Index::product(product_index)], "value", value, &[])
    }

    /// Product custom dimension (`pr{X}cd{Y}`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_pr_x_cd_y(
        &mut self,
        product_index: u32,
        dimension_index: u32,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_indexed(
            keys::PR_X_CD_Y,
            &[Index::product(product_index), Index::dimension(dimension_index)],
            "value",
            value,
            &[],
        )
    }

    /// Product custom metric (`pr{X}cm{Y}`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_pr_x_cm_y(
        &mut self,
        product_index: u32,
        metric_index: u32,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_indexed(
            keys::PR_X_CM_Y,
            &[Index::product(product_index), Index::metric(metric_index)],
            "value",
            value,
            &[],
        )
    }

    /// Product action (`pa`).
    pub fn with_pa(&mut self, product_action: ProductAction) -> &mut Self {
        self.put(keys::PA, product_action.as_str())
    }

    pub fn with_pa_as_detail(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Detail)
    }

    pub fn with_pa_as_click(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Click)
    }

    pub fn with_pa_as_add(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Add)
    }

    pub fn with_pa_as_remove(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Remove)
    }

    pub fn with_pa_as_checkout(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Checkout)
    }

    pub fn with_pa_as_checkout_option(&mut self) -> &mut Self {
        self.with_pa(ProductAction::CheckoutOption)
    }

    pub fn with_pa_as_purchase(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Purchase)
    }

    pub fn with_pa_as_refund(&mut self) -> &mut Self {
        self.with_pa(ProductAction::Refund)
    }

    /// Coupon code (`tcc`) for the transaction.
    pub fn with_tcc(&mut self, coupon_code: impl Into<String>) -> &mut Self {
        self.put(keys::TCC, coupon_code)
    }

    /// Product action list (`pal`) the action happened in.
    pub fn with_pal(&mut self, product_action_list: impl Into<String>) -> &mut Self {
        self.put(keys::PAL, product_action_list)
    }

    /// Checkout step (`cos`).
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` for a negative step.
    pub fn with_cos(&mut self, checkout_step: i64) -> Result<&mut Self> {
        self.put_non_negative(keys::COS, "checkoutStep", checkout_step)
    }

    /// Checkout step option (`col`).
    pub fn with_col(&mut self, checkout_step_option: impl Into<String>) -> &mut Self {
        self.put(keys::COL, checkout_step_option)
    }

    /// Product impression list name (`il{X}nm`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad list index.
    pub fn with_il_x_nm(&mut self, list_index: u32, list_name: impl Into<String>) -> Result<&mut Self> {
        self.put_indexed(
            keys::IL_X_NM,
            &[Index::list(list_index)],
            "productImpressionListName",
            list_name,
            &[],
        )
    }

    /// Product impression SKU (`il{X}pi{Y}id`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_id(
        &mut self,
        list_index: u32,
        product_index: u32,
        sku: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(keys::IL_X_PI_Y_ID, list_index, product_index, "productImpressionSKU", sku)
    }

    /// Product impression name (`il{X}pi{Y}nm`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_nm(
        &mut self,
        list_index: u32,
        product_index: u32,
        name: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(keys::IL_X_PI_Y_NM, list_index, product_index, "productImpressionName", name)
    }

    /// Product impression brand (`il{X}pi{Y}br`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_br(
        &mut self,
        list_index: u32,
        product_index: u32,
        brand: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(keys::IL_X_PI_Y_BR, list_index, product_index, "productImpressionBrand", brand)
    }

    /// Product impression category (`il{X}pi{Y}ca`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_ca(
        &mut self,
        list_index: u32,
        product_index: u32,
        category: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(
            keys::IL_X_PI_Y_CA,
            list_index,
            product_index,
            "productImpressionCategory",
            category,
        )
    }

    /// Product impression variant (`il{X}pi{Y}va`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_va(
        &mut self,
        list_index: u32,
        product_index: u32,
        variant: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(
            keys::IL_X_PI_Y_VA,
            list_index,
            product_index,
            "productImpressionVariant",
            variant,
        )
    }

    /// Product impression position (`il{X}pi{Y}ps`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_ps(
        &mut self,
        list_index: u32,
        product_index: u32,
        position: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(
            keys::IL_X_PI_Y_PS,
            list_index,
            product_index,
            "productImpressionPosition",
            position,
        )
    }

    /// Product impression price (`il{X}pi{Y}pr`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_pr(&mut self, list_index: u32, product_index: u32, price: Decimal) -> Result<&mut Self> {
        self.with_il_x_pi_y_pr_raw(list_index, product_index, price.to_string())
    }

    /// Product impression price (`il{X}pi{Y}pr`) as given.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when either index is outside `1..=200`.
    pub fn with_il_x_pi_y_pr_raw(
        &mut self,
        list_index: u32,
        product_index: u32,
        price: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_impression(keys::IL_X_PI_Y_PR, list_index, product_index, "productImpressionPrice", price)
    }

    /// Product impression custom dimension (`il{X}pi{Y}cd{Z}`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when any index is outside `1..=200`; indices
    /// are checked list, product, dimension.
    pub fn with_il_x_pi_y_cd_z(
        &mut self,
        list_index: u32,
        product_index: u32,
        dimension_index: u32,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_indexed(
            keys::IL_X_PI_Y_CD_Z,
            &[
                Index::list(list_index),
                Index::product(product_index),
                Index::dimension(dimension_index),
            ],
            "productImpressionCustomDimension",
            value,
            &[],
        )
    }

    /// Product impression custom metric (`il{X}pi{Y}cm{Z}`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when any index is outside `1..=200`.
    pub fn with_il_x_pi_y_cm_z(
        &mut self,
        list_index: u32,
        product_index: u32,
        metric_index: u32,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_indexed(
            keys::IL_X_PI_Y_CM_Z,
            &[
                Index::list(list_index),
                Index::product(product_index),
                Index::metric(metric_index),
            ],
            "productImpressionCustomMetric",
            value,
            &[],
        )
    }

    /// Promotion id (`promo{N}id`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad promo index.
    pub fn with_promo_n_id(&mut self, promo_index: u32, promotion_id: impl Into<String>) -> Result<&mut Self> {
        self.put_promotion(keys::PROMO_N_ID, promo_index, "promotionID", promotion_id)
    }

    /// Promotion name (`promo{N}nm`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad promo index.
    pub fn with_promo_n_nm(&mut self, promo_index: u32, promotion_name: impl Into<String>) -> Result<&mut Self> {
        self.put_promotion(keys::PROMO_N_NM, promo_index, "promotionName", promotion_name)
    }

    /// Promotion creative (`promo{N}cr`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad promo index.
    pub fn with_promo_n_cr(
        &mut self,
        promo_index: u32,
        promotion_creative: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_promotion(keys::PROMO_N_CR, promo_index, "promotionCreative", promotion_creative)
    }

    /// Promotion position (`promo{N}ps`).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a bad promo index.
    pub fn with_promo_n_ps(
        &mut self,
        promo_index: u32,
        promotion_position: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_promotion(keys::PROMO_N_PS, promo_index, "promotionPosition", promotion_position)
    }

    /// Promotion action (`promoa`): `view` or `promo_click`.
    pub fn with_promoa(&mut self, promotion_action: impl Into<String>) -> &mut Self {
        self.put(keys::PROMOA, promotion_action)
    }

    fn put_impression(
        &mut self,
        template: &str,
        list_index: u32,
        product_index: u32,
        field: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_indexed(
            template,
            &[Index::list(list_index), Index::product(product_index)],
            field,
            value,
            &[],
        )
    }

    fn put_promotion(
        &mut self,
        template: &str,
        promo_index: u32,
        field: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.put_indexed(template, &[Index::promo(promo_index)], field, value, &[])
    }
}

#[cfg(test)]
mod tests {
    use hitq_client::validation::ValidationError;

    use super::*;

    fn builder() -> QueryBuilder {
        QueryBuilder::with_endpoint("http://host/collect").unwrap()
    }

    #[test]
    fn product_keys_expand_the_index() {
        let mut qb = builder();
        qb.with_pr_n_id(7, "SKU1").unwrap();
        qb.with_pr_x_cd_y(1, 2, "Member").unwrap();
        assert_eq!(qb.query_string(), "pr7id=SKU1&pr1cd2=Member");
    }

    #[test]
    fn index_bounds_are_inclusive() {
        let mut qb = builder();
        qb.with_pr_n_nm(1, "a").unwrap();
        qb.with_pr_n_nm(200, "b").unwrap();
        assert_eq!(qb.query_string(), "pr1nm=a&pr200nm=b");

        for bad in [0, 201] {
            let err = qb.with_pr_n_nm(bad, "c").unwrap_err();
            assert!(matches!(
                err.validation(),
                Some(ValidationError::OutOfBounds { lo: 1, hi: 200, .. })
            ));
        }
        assert_eq!(qb.accumulator().len(), 2);
    }

    #[test]
    fn product_quantity_rejects_negative() {
        let mut qb = builder();
        let err = qb.with_pr_n_qt(1, -1).unwrap_err();
        assert!(matches!(err.validation(), Some(ValidationError::NegativeValue { .. })));
        qb.with_pr_n_qt(1, 0).unwrap();
        assert_eq!(qb.query_string(), "pr1qt=0");
    }

    #[test]
    fn impression_dimension_checks_every_index() {
        let mut qb = builder();
        qb.with_il_x_pi_y_cd_z(1, 2, 3, "Member").unwrap();
        assert_eq!(qb.query_string(), "il1pi2cd3=Member");

        let err = qb.with_il_x_pi_y_cd_z(1, 2, 201, "Member").unwrap_err();
        assert_eq!(err.validation().map(ValidationError::field), Some("dimensionIndex"));
    }

    #[test]
    fn product_text_ceiling() {
        let mut qb = builder();
        qb.with_pr_n_br(3, "b".repeat(500)).unwrap();
        assert!(qb.with_pr_n_br(3, "b".repeat(501)).unwrap_err().is_validation());
    }

    #[test]
    fn product_action_constants() {
        let mut qb = builder();
        qb.with_pa_as_checkout_option();
        assert_eq!(qb.get(keys::PA), Some("checkout_option"));
        qb.with_pa_as_refund();
        assert_eq!(qb.get(keys::PA), Some("refund"));
    }
}
