//! Bulk aggregation: totals and average margins over computed rows.

use serde::{Deserialize, Serialize};

use crate::model::BulkRow;

/// Totals and average margins over a bulk collection.
///
/// Always rebuilt from the full collection; never patched in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of rows folded into this summary.
    pub row_count: usize,
    pub quantity: f64,
    pub gross_revenue: f64,
    pub commission_fee: f64,
    /// Sum of each row's standard profit.
    pub profit: f64,
    pub discount_amount: f64,
    pub seller_funded_discount: f64,
    #[serde(rename = "trendyolFundedDiscount", alias = "platformFundedDiscount")]
    pub platform_funded_discount: f64,
    pub adjusted_gross_revenue: f64,
    pub adjusted_commission_fee: f64,
    pub adjusted_profit: f64,
    pub margin_sum: f64,
    pub adjusted_margin_sum: f64,
    /// Arithmetic mean of the rows' `profit_margin`.
    pub avg_profit_margin: f64,
    /// Arithmetic mean of the rows' `adjusted_profit_margin`.
    pub avg_adjusted_profit_margin: f64,
}

impl Summary {
    fn add(mut self, row: &BulkRow) -> Self {
        let out = &row.outputs;
        self.row_count += 1;
        self.quantity += row.inputs.quantity;
        self.gross_revenue += out.gross_revenue;
        self.commission_fee += out.commission_fee;
        self.profit += out.profit;
        self.discount_amount += out.discount_amount;
        self.seller_funded_discount += out.seller_funded_discount;
        self.platform_funded_discount += out.platform_funded_discount;
        self.adjusted_gross_revenue += out.adjusted_gross_revenue;
        self.adjusted_commission_fee += out.adjusted_commission_fee;
        self.adjusted_profit += out.adjusted_profit;
        self.margin_sum += out.profit_margin;
        self.adjusted_margin_sum += out.adjusted_profit_margin;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(mut self) -> Self {
        let count = self.row_count.max(1) as f64;
        self.avg_profit_margin = self.margin_sum / count;
        self.avg_adjusted_profit_margin = self.adjusted_margin_sum / count;
        self
    }
}

/// Reduce a collection of rows into a [`Summary`].
///
/// An empty collection yields all-zero totals and zero average margins.
#[must_use]
pub fn summarize(rows: &[BulkRow]) -> Summary {
    rows.iter()
        .fold(Summary::default(), Summary::add)
        .finish()
}
