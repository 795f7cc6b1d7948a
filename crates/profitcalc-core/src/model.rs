//! Data model: listing inputs, computed outputs and bulk rows.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_CAMPAIGN_DISCOUNT_RATE, DEFAULT_PLATFORM_COVERAGE_RATE};

/// Commercial inputs for one listing.
///
/// Rates are fractions in `[0, 1]`, not percentages. The engine does not
/// enforce any range; see [`crate::boundary`] for entry clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputs {
    /// Unit sale price.
    pub sale_price: f64,
    /// Units sold.
    pub quantity: f64,
    /// Platform commission as a fraction of revenue.
    pub commission_rate: f64,
    /// Absolute shipping cost borne by the seller.
    pub shipping_cost_paid_by_seller: f64,
    /// Cost of goods sold, absolute.
    pub cogs: f64,
    /// Other operating expenses, absolute.
    pub expenses: f64,
    /// Whether the promotional campaign applies.
    pub campaign_participation: bool,
    /// Total discount fraction applied to price times quantity.
    pub campaign_discount_rate: f64,
    /// Fraction of the campaign discount funded by the platform.
    #[serde(rename = "trendyolCoverageRate", alias = "platformCoverageRate")]
    pub platform_coverage_rate: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            sale_price: 0.0,
            quantity: 0.0,
            commission_rate: 0.0,
            shipping_cost_paid_by_seller: 0.0,
            cogs: 0.0,
            expenses: 0.0,
            campaign_participation: false,
            campaign_discount_rate: DEFAULT_CAMPAIGN_DISCOUNT_RATE,
            platform_coverage_rate: DEFAULT_PLATFORM_COVERAGE_RATE,
        }
    }
}

/// Results derived from [`Inputs`], standard and campaign-adjusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outputs {
    pub gross_revenue: f64,
    pub commission_fee: f64,
    pub net_revenue_after_commission: f64,
    pub net_revenue_after_costs: f64,
    pub profit: f64,
    pub profit_margin: f64,

    pub discount_amount: f64,
    pub seller_funded_discount: f64,
    #[serde(rename = "trendyolFundedDiscount", alias = "platformFundedDiscount")]
    pub platform_funded_discount: f64,
    pub adjusted_gross_revenue: f64,
    pub adjusted_commission_fee: f64,
    pub adjusted_net_revenue_after_commission: f64,
    pub adjusted_net_revenue_after_costs: f64,
    pub adjusted_profit: f64,
    pub adjusted_profit_margin: f64,
}

/// Opaque identity of a row within a bulk collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Uuid);

impl RowId {
    /// Generate a fresh random identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One bulk record: identity, optional label, inputs and their outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRow {
    pub id: RowId,
    #[serde(rename = "productLabel", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub inputs: Inputs,
    #[serde(flatten)]
    pub outputs: Outputs,
}

impl BulkRow {
    /// Build a row by running `inputs` through the engine.
    #[must_use]
    pub fn new(id: RowId, label: Option<String>, inputs: Inputs) -> Self {
        Self {
            id,
            label,
            inputs,
            outputs: crate::engine::compute(&inputs),
        }
    }

    /// Replace the inputs and recompute every output.
    pub fn set_inputs(&mut self, inputs: Inputs) {
        self.inputs = inputs;
        self.outputs = crate::engine::compute(&inputs);
    }
}
