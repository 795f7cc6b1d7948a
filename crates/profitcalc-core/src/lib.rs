//! # profitcalc-core
//!
//! Core library for marketplace seller profitability.
//! Computes standard and campaign-adjusted results for a listing and
//! reduces bulk collections of computed rows into summary statistics.

pub mod aggregate;
pub mod boundary;
pub mod constants;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod model;
pub mod rates;

// Re-exports
pub use aggregate::{summarize, Summary};
pub use constants::{
    exit_codes, DEFAULT_CAMPAIGN_DISCOUNT_RATE, DEFAULT_PLATFORM_COVERAGE_RATE,
    PARALLEL_BATCH_THRESHOLD,
};
pub use engine::compute;
pub use error::ProfitError;
pub use ledger::{imported_row, FieldUpdate, InputField, Ledger};
pub use model::{BulkRow, Inputs, Outputs, RowId};
pub use rates::Category;
