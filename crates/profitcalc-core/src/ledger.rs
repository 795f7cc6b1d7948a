//! Identity-addressed collection of bulk rows.
//!
//! The ledger owns its rows by value. Every insert and edit goes through
//! the input boundary and recomputes the affected row with the engine;
//! other rows are never touched. Summaries are always rebuilt from the
//! full collection.

use std::fmt;
use std::str::FromStr;

use crate::aggregate::{summarize, Summary};
use crate::boundary::clamp_field;
use crate::constants::{BLANK_LABEL_PREFIX, IMPORTED_LABEL_PREFIX};
use crate::error::ProfitError;
use crate::model::{BulkRow, Inputs, RowId};

/// Editable input fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    SalePrice,
    Quantity,
    CommissionRate,
    ShippingCostPaidBySeller,
    Cogs,
    Expenses,
    CampaignParticipation,
    CampaignDiscountRate,
    PlatformCoverageRate,
}

impl InputField {
    /// All fields in import column order.
    pub const ALL: [InputField; 9] = [
        InputField::SalePrice,
        InputField::Quantity,
        InputField::CommissionRate,
        InputField::ShippingCostPaidBySeller,
        InputField::Cogs,
        InputField::Expenses,
        InputField::CampaignParticipation,
        InputField::CampaignDiscountRate,
        InputField::PlatformCoverageRate,
    ];

    /// Whether the field holds a fraction in `[0, 1]`.
    #[must_use]
    pub fn is_rate(self) -> bool {
        matches!(
            self,
            Self::CommissionRate | Self::CampaignDiscountRate | Self::PlatformCoverageRate
        )
    }

    /// Canonical kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SalePrice => "sale-price",
            Self::Quantity => "quantity",
            Self::CommissionRate => "commission-rate",
            Self::ShippingCostPaidBySeller => "shipping-cost",
            Self::Cogs => "cogs",
            Self::Expenses => "expenses",
            Self::CampaignParticipation => "campaign",
            Self::CampaignDiscountRate => "discount-rate",
            Self::PlatformCoverageRate => "coverage-rate",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputField {
    type Err = ProfitError;

    /// Accepts kebab, snake and camel case, plus the short column names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        let field = match key.as_str() {
            "saleprice" | "price" => Self::SalePrice,
            "quantity" | "qty" => Self::Quantity,
            "commissionrate" | "commission" | "comm" => Self::CommissionRate,
            "shippingcostpaidbyseller" | "shippingcost" | "shipping" | "ship" => {
                Self::ShippingCostPaidBySeller
            }
            "cogs" => Self::Cogs,
            "expenses" | "exp" => Self::Expenses,
            "campaignparticipation" | "campaign" | "camp" => Self::CampaignParticipation,
            "campaigndiscountrate" | "discountrate" | "discount" | "disc" => {
                Self::CampaignDiscountRate
            }
            "trendyolcoveragerate" | "platformcoveragerate" | "coveragerate" | "coverage"
            | "cov" => Self::PlatformCoverageRate,
            _ => return Err(ProfitError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

/// A single-field edit to a row's inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldUpdate {
    /// Set a numeric field.
    Number(InputField, f64),
    /// Set campaign participation.
    Campaign(bool),
}

impl FieldUpdate {
    /// Build an update from raw text, the way a table cell is edited.
    ///
    /// Unparseable numbers become `0`. Campaign participation accepts
    /// `yes`, `true`, `on` and `1`, case-insensitively.
    #[must_use]
    pub fn parse(field: InputField, raw: &str) -> Self {
        let raw = raw.trim();
        if field == InputField::CampaignParticipation {
            let on = matches!(
                raw.to_ascii_lowercase().as_str(),
                "yes" | "true" | "on" | "1"
            );
            return Self::Campaign(on);
        }
        let value = raw.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        Self::Number(field, value)
    }

    /// The field this update targets.
    #[must_use]
    pub fn field(&self) -> InputField {
        match self {
            Self::Number(field, _) => *field,
            Self::Campaign(_) => InputField::CampaignParticipation,
        }
    }

    /// Apply to `inputs`, clamping the new value at the boundary.
    #[must_use]
    pub fn apply(self, mut inputs: Inputs) -> Inputs {
        match self {
            Self::Campaign(on) => inputs.campaign_participation = on,
            Self::Number(field, value) => {
                let value = clamp_field(field, value);
                match field {
                    InputField::SalePrice => inputs.sale_price = value,
                    InputField::Quantity => inputs.quantity = value,
                    InputField::CommissionRate => inputs.commission_rate = value,
                    InputField::ShippingCostPaidBySeller => {
                        inputs.shipping_cost_paid_by_seller = value;
                    }
                    InputField::Cogs => inputs.cogs = value,
                    InputField::Expenses => inputs.expenses = value,
                    InputField::CampaignParticipation => {
                        inputs.campaign_participation = value != 0.0;
                    }
                    InputField::CampaignDiscountRate => inputs.campaign_discount_rate = value,
                    InputField::PlatformCoverageRate => inputs.platform_coverage_rate = value,
                }
            }
        }
        inputs
    }
}

/// Build the row for the `index`-th imported record (0-based).
///
/// Missing or blank labels become `ID_{index + 1}`; inputs are clamped.
#[must_use]
pub fn imported_row(index: usize, label: Option<String>, inputs: Inputs) -> BulkRow {
    let label = label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| format!("{IMPORTED_LABEL_PREFIX}{}", index + 1));
    BulkRow::new(RowId::new(), Some(label), inputs.clamped())
}

/// Single-owner collection of bulk rows addressed by [`RowId`].
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    rows: Vec<BulkRow>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from labelled records, replacing missing labels
    /// with `ID_{n}` (1-based position).
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, Inputs)>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, (label, inputs))| imported_row(index, label, inputs))
            .collect();
        Self { rows }
    }

    /// Wrap already computed rows.
    #[must_use]
    pub fn from_rows(rows: Vec<BulkRow>) -> Self {
        Self { rows }
    }

    /// Append a row and return its identity.
    pub fn push(&mut self, label: Option<String>, inputs: Inputs) -> RowId {
        let id = RowId::new();
        self.rows.push(BulkRow::new(id, label, inputs.clamped()));
        id
    }

    /// Append a blank row labelled `NODE_{n}`.
    pub fn push_blank(&mut self) -> RowId {
        let label = format!("{BLANK_LABEL_PREFIX}{}", self.rows.len() + 1);
        self.push(Some(label), Inputs::default())
    }

    /// Edit one input field of one row and recompute that row.
    pub fn update(&mut self, id: RowId, update: FieldUpdate) -> Result<&BulkRow, ProfitError> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ProfitError::UnknownRow(id))?;
        row.set_inputs(update.apply(row.inputs));
        tracing::debug!(row = %id, field = %update.field(), "row recomputed");
        Ok(&*row)
    }

    /// Remove a row, returning it.
    pub fn remove(&mut self, id: RowId) -> Result<BulkRow, ProfitError> {
        let index = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(ProfitError::UnknownRow(id))?;
        Ok(self.rows.remove(index))
    }

    /// Look up a row.
    #[must_use]
    pub fn get(&self, id: RowId) -> Option<&BulkRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[BulkRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Summary over the current collection.
    #[must_use]
    pub fn summary(&self) -> Summary {
        summarize(&self.rows)
    }

    /// Consume the ledger, yielding its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<BulkRow> {
        self.rows
    }
}
