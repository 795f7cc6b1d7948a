//! Presentation interface.

use profitcalc_core::{BulkRow, Inputs, Outputs, Summary};

/// Trait for presenting results to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present one listing's inputs and computed outputs.
    fn present_single(&self, label: Option<&str>, inputs: &Inputs, outputs: &Outputs);

    /// Present the rows of a bulk collection.
    fn present_rows(&self, rows: &[BulkRow]);

    /// Present the summary of a bulk collection.
    fn present_summary(&self, summary: &Summary);

    /// Present an error.
    fn present_error(&self, error: &str);
}
