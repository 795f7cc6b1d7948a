//! # profitcalc-batch
//!
//! Delimited-text import and export of listing records, parallel bulk
//! evaluation, and the presenter interface consumed by front ends.

pub mod evaluate;
pub mod export;
pub mod import;
pub mod interfaces;

pub use evaluate::{evaluate_records, BatchReport};
pub use export::{export_path, export_string, EXPORT_HEADER};
pub use import::{import_path, import_str, ImportedRecord};
pub use interfaces::ReportPresenter;
