//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use profitcalc_core::constants::{DEFAULT_CAMPAIGN_DISCOUNT_RATE, DEFAULT_PLATFORM_COVERAGE_RATE};
use profitcalc_core::{Category, FieldUpdate, InputField, Inputs, ProfitError};

/// Marketplace seller profitability with campaign adjustment.
#[derive(Parser, Debug)]
#[command(name = "profitcalc", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Currency code printed in front of amounts.
    #[arg(long, global = true, default_value = "SAR", env = "PROFITCALC_CURRENCY")]
    pub currency: String,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only the profit figures).
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute one listing.
    Single(SingleArgs),
    /// Compute every listing in a comma-separated file and summarize.
    Bulk(BulkArgs),
    /// List reference commission rates by category.
    Rates,
}

/// Inputs for a single listing. Values are clamped on entry.
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SingleArgs {
    /// Listing label.
    #[arg(long)]
    pub label: Option<String>,

    /// Unit sale price.
    #[arg(short = 'p', long, default_value_t = 0.0)]
    pub sale_price: f64,

    /// Units sold.
    #[arg(short = 'n', long = "quantity", visible_alias = "qty", default_value_t = 0.0)]
    pub quantity: f64,

    /// Commission as a fraction (0.15 for 15%).
    #[arg(short = 'c', long, conflicts_with = "category")]
    pub commission_rate: Option<f64>,

    /// Take the commission rate from a product category.
    #[arg(long)]
    pub category: Option<Category>,

    /// Shipping cost paid by the seller.
    #[arg(long, visible_alias = "shipping", default_value_t = 0.0)]
    pub shipping_cost: f64,

    /// Cost of goods sold.
    #[arg(long, default_value_t = 0.0)]
    pub cogs: f64,

    /// Other operating expenses.
    #[arg(long, default_value_t = 0.0)]
    pub expenses: f64,

    /// Join the promotional campaign.
    #[arg(long)]
    pub campaign: bool,

    /// Campaign discount as a fraction of price times quantity.
    #[arg(long, default_value_t = DEFAULT_CAMPAIGN_DISCOUNT_RATE, env = "PROFITCALC_DISCOUNT_RATE")]
    pub discount_rate: f64,

    /// Share of the discount funded by the platform.
    #[arg(long, default_value_t = DEFAULT_PLATFORM_COVERAGE_RATE, env = "PROFITCALC_COVERAGE_RATE")]
    pub coverage_rate: f64,
}

impl SingleArgs {
    /// Build clamped engine inputs.
    #[must_use]
    pub fn inputs(&self) -> Inputs {
        let commission_rate = self
            .commission_rate
            .or_else(|| self.category.map(Category::rate))
            .unwrap_or(0.0);
        Inputs {
            sale_price: self.sale_price,
            quantity: self.quantity,
            commission_rate,
            shipping_cost_paid_by_seller: self.shipping_cost,
            cogs: self.cogs,
            expenses: self.expenses,
            campaign_participation: self.campaign,
            campaign_discount_rate: self.discount_rate,
            platform_coverage_rate: self.coverage_rate,
        }
        .clamped()
    }
}

/// Bulk mode over a delimited file.
#[derive(Args, Debug)]
pub struct BulkArgs {
    /// Input file; the first line is a header.
    pub input: PathBuf,

    /// Write the computed collection to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Edit one field of a row before summarizing (repeatable).
    #[arg(long = "set", value_name = "REF:FIELD=VALUE", value_parser = parse_edit)]
    pub edits: Vec<RowEdit>,

    /// Remove rows by reference label (repeatable).
    #[arg(long = "drop", value_name = "REF")]
    pub drops: Vec<String>,

    /// Append blank rows.
    #[arg(long, default_value_t = 0)]
    pub blank: usize,

    /// Print only the summary.
    #[arg(long)]
    pub summary_only: bool,
}

/// A row edit addressed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEdit {
    pub label: String,
    pub update: FieldUpdate,
}

/// Parse `REF:FIELD=VALUE`.
pub fn parse_edit(s: &str) -> Result<RowEdit, ProfitError> {
    let (label, assignment) = s
        .rsplit_once(':')
        .ok_or_else(|| ProfitError::Config(format!("expected REF:FIELD=VALUE, got {s:?}")))?;
    let (field, value) = assignment
        .split_once('=')
        .ok_or_else(|| ProfitError::Config(format!("expected FIELD=VALUE, got {assignment:?}")))?;
    let field: InputField = field.parse()?;
    Ok(RowEdit {
        label: label.trim().to_string(),
        update: FieldUpdate::parse(field, value),
    })
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
