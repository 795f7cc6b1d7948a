//! Record export to comma-separated text.
//!
//! The first ten columns use the import column order, so an exported
//! file imports back to the same inputs. Three computed columns follow.

use std::io;
use std::path::Path;

use profitcalc_core::{BulkRow, ProfitError};

/// Fixed header row.
pub const EXPORT_HEADER: [&str; 13] = [
    "Ref", "Price", "Qty", "Comm", "Ship", "COGS", "Exp", "Camp", "Disc", "Cov", "Gross", "Profit",
    "Margin",
];

/// Label written for rows that have none.
const UNLABELLED: &str = "UNIT";

/// Write `rows` as delimited text to `writer`.
pub fn write_rows<W: io::Write>(rows: &[BulkRow], writer: W) -> Result<(), ProfitError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    out.write_record(EXPORT_HEADER).map_err(csv_error)?;
    for row in rows {
        out.write_record(&record(row)).map_err(csv_error)?;
    }
    out.flush()?;
    Ok(())
}

/// Render `rows` as a string.
pub fn export_string(rows: &[BulkRow]) -> Result<String, ProfitError> {
    let mut buf = Vec::new();
    write_rows(rows, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ProfitError::Csv(e.to_string()))
}

/// Write `rows` to a file at `path`.
pub fn export_path(rows: &[BulkRow], path: &Path) -> Result<(), ProfitError> {
    let file = std::fs::File::create(path)?;
    write_rows(rows, io::BufWriter::new(file))?;
    tracing::info!(rows = rows.len(), path = %path.display(), "exported rows");
    Ok(())
}

fn record(row: &BulkRow) -> [String; 13] {
    let i = &row.inputs;
    let o = &row.outputs;
    [
        row.label
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| UNLABELLED.to_string()),
        decimal(i.sale_price),
        decimal(i.quantity),
        decimal(i.commission_rate),
        decimal(i.shipping_cost_paid_by_seller),
        decimal(i.cogs),
        decimal(i.expenses),
        if i.campaign_participation { "Yes" } else { "No" }.to_string(),
        decimal(i.campaign_discount_rate),
        decimal(i.platform_coverage_rate),
        decimal(o.gross_revenue),
        decimal(o.profit),
        decimal(o.profit_margin),
    ]
}

/// Shortest decimal form that reads back to the same value.
fn decimal(value: f64) -> String {
    if value == 0.0 {
        // Avoid printing negative zero.
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn csv_error(e: csv::Error) -> ProfitError {
    ProfitError::Csv(e.to_string())
}
