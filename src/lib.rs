//! Shared helpers for the workspace-level integration tests.

use profitcalc_core::{Outputs, Summary};

/// Relative tolerance used when comparing computed amounts.
pub const TOLERANCE: f64 = 1e-9;

/// `true` when `a` and `b` agree to [`TOLERANCE`], relative to their magnitude.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

/// Named pairs of every output field, for field-by-field comparison.
#[must_use]
pub fn output_fields(o: &Outputs) -> [(&'static str, f64); 15] {
    [
        ("grossRevenue", o.gross_revenue),
        ("commissionFee", o.commission_fee),
        ("netRevenueAfterCommission", o.net_revenue_after_commission),
        ("netRevenueAfterCosts", o.net_revenue_after_costs),
        ("profit", o.profit),
        ("profitMargin", o.profit_margin),
        ("discountAmount", o.discount_amount),
        ("sellerFundedDiscount", o.seller_funded_discount),
        ("trendyolFundedDiscount", o.platform_funded_discount),
        ("adjustedGrossRevenue", o.adjusted_gross_revenue),
        ("adjustedCommissionFee", o.adjusted_commission_fee),
        (
            "adjustedNetRevenueAfterCommission",
            o.adjusted_net_revenue_after_commission,
        ),
        (
            "adjustedNetRevenueAfterCosts",
            o.adjusted_net_revenue_after_costs,
        ),
        ("adjustedProfit", o.adjusted_profit),
        ("adjustedProfitMargin", o.adjusted_profit_margin),
    ]
}

/// Named pairs of every numeric summary field.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_fields(s: &Summary) -> [(&'static str, f64); 15] {
    [
        ("rowCount", s.row_count as f64),
        ("quantity", s.quantity),
        ("grossRevenue", s.gross_revenue),
        ("commissionFee", s.commission_fee),
        ("profit", s.profit),
        ("discountAmount", s.discount_amount),
        ("sellerFundedDiscount", s.seller_funded_discount),
        ("trendyolFundedDiscount", s.platform_funded_discount),
        ("adjustedGrossRevenue", s.adjusted_gross_revenue),
        ("adjustedCommissionFee", s.adjusted_commission_fee),
        ("adjustedProfit", s.adjusted_profit),
        ("marginSum", s.margin_sum),
        ("adjustedMarginSum", s.adjusted_margin_sum),
        ("avgProfitMargin", s.avg_profit_margin),
        ("avgAdjustedProfitMargin", s.avg_adjusted_profit_margin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_relative() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(1e12 + 1e-3, 1e12));
        assert!(!approx_eq(1.0, 1.001));
    }
}
