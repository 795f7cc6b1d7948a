//! Boundary error type.
//!
//! The engine and the aggregator are total and never produce these; they
//! come from import, export and ledger addressing.

use crate::model::RowId;

/// Error type for profitability operations at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProfitError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited text could not be framed into records.
    #[error("csv error: {0}")]
    Csv(String),

    /// No row with this identity exists in the ledger.
    #[error("unknown row: {0}")]
    UnknownRow(RowId),

    /// The named input field does not exist.
    #[error("unknown input field: {0}")]
    UnknownField(String),

    /// The named commission category does not exist.
    #[error("unknown commission category: {0}")]
    UnknownCategory(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
