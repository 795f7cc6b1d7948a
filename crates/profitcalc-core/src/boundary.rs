//! Input boundary clamping.
//!
//! Every entry path (single record, ledger inserts and edits, import)
//! passes values through here before they reach the engine. Amounts are
//! clamped to `>= 0`; the three rate fields are clamped to `[0, 1]`.
//! Non-finite values become `0`.

use crate::ledger::InputField;
use crate::model::Inputs;

/// Clamp an absolute amount (price, quantity, cost) to `>= 0`.
#[must_use]
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Clamp a rate to `[0, 1]`.
#[must_use]
pub fn clamp_rate(value: f64) -> f64 {
    clamp_amount(value).min(1.0)
}

/// Clamp a value destined for `field`.
#[must_use]
pub fn clamp_field(field: InputField, value: f64) -> f64 {
    if field.is_rate() {
        clamp_rate(value)
    } else {
        clamp_amount(value)
    }
}

impl Inputs {
    /// Return a copy with every numeric field clamped to its valid range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            sale_price: clamp_amount(self.sale_price),
            quantity: clamp_amount(self.quantity),
            commission_rate: clamp_rate(self.commission_rate),
            shipping_cost_paid_by_seller: clamp_amount(self.shipping_cost_paid_by_seller),
            cogs: clamp_amount(self.cogs),
            expenses: clamp_amount(self.expenses),
            campaign_participation: self.campaign_participation,
            campaign_discount_rate: clamp_rate(self.campaign_discount_rate),
            platform_coverage_rate: clamp_rate(self.platform_coverage_rate),
        }
    }
}
