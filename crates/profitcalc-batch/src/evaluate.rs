//! Bulk evaluation: map imported records through the engine.

use std::time::{Duration, Instant};

use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use profitcalc_core::ledger::imported_row;
use profitcalc_core::{BulkRow, Ledger, Summary, PARALLEL_BATCH_THRESHOLD};

use crate::import::ImportedRecord;

/// Result of evaluating a batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Computed rows, in input order.
    pub ledger: Ledger,
    /// Summary over every row.
    pub summary: Summary,
    /// Wall time spent computing rows and the summary.
    pub duration: Duration,
}

/// Evaluate every record and summarize the result.
///
/// Small batches run inline; batches above [`PARALLEL_BATCH_THRESHOLD`]
/// fan out on the rayon pool. Row order always matches record order.
#[must_use]
pub fn evaluate_records(records: Vec<ImportedRecord>) -> BatchReport {
    let start = Instant::now();
    let count = records.len();

    let rows: Vec<BulkRow> = if count <= PARALLEL_BATCH_THRESHOLD {
        records
            .into_iter()
            .enumerate()
            .map(|(i, r)| imported_row(i, r.label, r.inputs))
            .collect()
    } else {
        records
            .into_par_iter()
            .enumerate()
            .map(|(i, r)| imported_row(i, r.label, r.inputs))
            .collect()
    };

    let ledger = Ledger::from_rows(rows);
    let summary = ledger.summary();
    let duration = start.elapsed();

    tracing::debug!(rows = count, ?duration, "batch evaluated");

    BatchReport {
        ledger,
        summary,
        duration,
    }
}
