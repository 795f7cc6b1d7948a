//! Record import from comma-separated text.
//!
//! Column order: `label, salePrice, quantity, commissionRate,
//! shippingCostPaidBySeller, cogs, expenses, campaignParticipation,
//! campaignDiscountRate, trendyolCoverageRate`. The first line is a header.
//! Malformed numbers are coerced, never rejected.

use std::path::Path;

use profitcalc_core::constants::{DEFAULT_CAMPAIGN_DISCOUNT_RATE, DEFAULT_PLATFORM_COVERAGE_RATE};
use profitcalc_core::{Inputs, ProfitError};

/// One parsed line: an optional label and raw (unclamped) inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRecord {
    pub label: Option<String>,
    pub inputs: Inputs,
}

/// Parse delimited text into records.
///
/// Every physical line is one record. The first line is the header, even
/// when blank, and whitespace-only lines are skipped. Missing or
/// non-numeric numbers default to `0`, except the discount rate (`0.25`)
/// and the coverage rate (`0.30`).
pub fn import_str(text: &str) -> Result<Vec<ImportedRecord>, ProfitError> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(csv::Trim::All);

    let mut records = Vec::new();
    let mut fields = csv::StringRecord::new();
    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        // Framed per line: an open quote never reaches the next record
        let mut reader = builder.from_reader(line.as_bytes());
        if !reader
            .read_record(&mut fields)
            .map_err(|e| ProfitError::Csv(e.to_string()))?
        {
            continue;
        }
        let columns: Vec<&str> = fields.iter().collect();
        records.push(parse_record(&columns));
    }

    tracing::info!(records = records.len(), "imported records");
    Ok(records)
}

/// Read and parse a file.
pub fn import_path(path: &Path) -> Result<Vec<ImportedRecord>, ProfitError> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read import file");
    import_str(&text)
}

/// Parse the trimmed fields of one data line.
#[must_use]
pub fn parse_record(fields: &[&str]) -> ImportedRecord {
    let column = |i: usize| fields.get(i).copied();

    let label = column(0)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let inputs = Inputs {
        sale_price: number(column(1), 0.0),
        quantity: number(column(2), 0.0),
        commission_rate: number(column(3), 0.0),
        shipping_cost_paid_by_seller: number(column(4), 0.0),
        cogs: number(column(5), 0.0),
        expenses: number(column(6), 0.0),
        campaign_participation: column(7).is_some_and(|s| s.eq_ignore_ascii_case("yes")),
        campaign_discount_rate: number(column(8), DEFAULT_CAMPAIGN_DISCOUNT_RATE),
        platform_coverage_rate: number(column(9), DEFAULT_PLATFORM_COVERAGE_RATE),
    };

    ImportedRecord { label, inputs }
}

fn number(field: Option<&str>, default: f64) -> f64 {
    let Some(raw) = field else {
        return default;
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !raw.is_empty() {
                tracing::debug!(value = raw, default, "non-numeric field coerced");
            }
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "label,price,qty,comm,ship,cogs,exp,camp,disc,cov\n";

    #[test]
    fn parses_full_line() {
        let text = format!("{HEADER}SKU-1,100,10,0.15,20,500,30,Yes,0.2,0.5\n");
        let records = import_str(&text).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.label.as_deref(), Some("SKU-1"));
        assert_eq!(r.inputs.sale_price, 100.0);
        assert_eq!(r.inputs.quantity, 10.0);
        assert_eq!(r.inputs.commission_rate, 0.15);
        assert_eq!(r.inputs.shipping_cost_paid_by_seller, 20.0);
        assert_eq!(r.inputs.cogs, 500.0);
        assert_eq!(r.inputs.expenses, 30.0);
        assert!(r.inputs.campaign_participation);
        assert_eq!(r.inputs.campaign_discount_rate, 0.2);
        assert_eq!(r.inputs.platform_coverage_rate, 0.5);
    }

    #[test]
    fn header_only_yields_nothing() {
        assert!(import_str(HEADER).unwrap().is_empty());
        assert!(import_str("").unwrap().is_empty());
    }

    #[test]
    fn skips_blank_lines() {
        let text = format!("{HEADER}\nA,1,1\n\n   \nB,2,2\n");
        let records = import_str(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].label.as_deref(), Some("B"));
    }

    #[test]
    fn missing_columns_take_defaults() {
        let text = format!("{HEADER}A,10\n");
        let r = &import_str(&text).unwrap()[0];
        assert_eq!(r.inputs.sale_price, 10.0);
        assert_eq!(r.inputs.quantity, 0.0);
        assert!(!r.inputs.campaign_participation);
        assert_eq!(r.inputs.campaign_discount_rate, 0.25);
        assert_eq!(r.inputs.platform_coverage_rate, 0.30);
    }

    #[test]
    fn non_numeric_fields_take_defaults() {
        let text = format!("{HEADER}A,abc,NaN,inf,x,,y,no,half,most\n");
        let r = &import_str(&text).unwrap()[0];
        assert_eq!(r.inputs.sale_price, 0.0);
        assert_eq!(r.inputs.quantity, 0.0);
        assert_eq!(r.inputs.commission_rate, 0.0);
        assert_eq!(r.inputs.cogs, 0.0);
        assert_eq!(r.inputs.campaign_discount_rate, 0.25);
        assert_eq!(r.inputs.platform_coverage_rate, 0.30);
    }

    #[test]
    fn explicit_zero_rates_are_kept() {
        let text = format!("{HEADER}A,10,1,0,0,0,0,yes,0,0\n");
        let r = &import_str(&text).unwrap()[0];
        assert_eq!(r.inputs.campaign_discount_rate, 0.0);
        assert_eq!(r.inputs.platform_coverage_rate, 0.0);
    }

    #[test]
    fn campaign_flag_is_case_insensitive_yes_only() {
        let text = format!("{HEADER}A,1,1,0,0,0,0,YES\nB,1,1,0,0,0,0,true\nC,1,1,0,0,0,0, yEs \n");
        let records = import_str(&text).unwrap();
        assert!(records[0].inputs.campaign_participation);
        assert!(!records[1].inputs.campaign_participation);
        assert!(records[2].inputs.campaign_participation);
    }

    #[test]
    fn empty_label_is_none() {
        let text = format!("{HEADER},5,2\n");
        let r = &import_str(&text).unwrap()[0];
        assert_eq!(r.label, None);
    }

    #[test]
    fn handles_crlf_and_bom() {
        let text = "\u{FEFF}label,price,qty\r\nA,3,4\r\n";
        let r = &import_str(text).unwrap()[0];
        assert_eq!(r.label.as_deref(), Some("A"));
        assert_eq!(r.inputs.quantity, 4.0);
    }

    #[test]
    fn quoted_label_with_comma() {
        let text = format!("{HEADER}\"Mug, large\",12,3\n");
        let r = &import_str(&text).unwrap()[0];
        assert_eq!(r.label.as_deref(), Some("Mug, large"));
        assert_eq!(r.inputs.sale_price, 12.0);
    }

    #[test]
    fn negative_values_are_not_clamped_here() {
        let text = format!("{HEADER}A,-5,2\n");
        let r = &import_str(&text).unwrap()[0];
        assert_eq!(r.inputs.sale_price, -5.0);
    }

    #[test]
    fn comma_only_line_is_a_default_record() {
        let records = import_str("h,h,h\nA,1,1\n,,,\nB,2,2\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].label, None);
        assert_eq!(records[1].inputs, parse_record(&[]).inputs);

        let rows: Vec<_> = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| profitcalc_core::imported_row(i, r.label, r.inputs))
            .collect();
        assert_eq!(rows[1].label.as_deref(), Some("ID_2"));
        assert_eq!(rows[2].label.as_deref(), Some("B"));
    }

    #[test]
    fn open_quote_stays_on_its_line() {
        let records = import_str("h,h,h\n\"Big Mug,100,10\nB,1,1\nC,2,2\n").unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0]
            .label
            .as_deref()
            .is_some_and(|l| !l.contains('\n')));
        assert_eq!(records[1].label.as_deref(), Some("B"));
        assert_eq!(records[1].inputs.sale_price, 1.0);
        assert_eq!(records[2].label.as_deref(), Some("C"));
        assert_eq!(records[2].inputs.quantity, 2.0);
    }

    #[test]
    fn first_line_is_the_header_even_when_blank() {
        let records = import_str("\nRef,Price,Qty\nA,1,1\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label.as_deref(), Some("Ref"));
        assert_eq!(records[0].inputs.sale_price, 0.0);
        assert_eq!(records[1].label.as_deref(), Some("A"));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");
        std::fs::write(&path, format!("{HEADER}A,1,2\nB,3,4\n")).unwrap();
        let records = import_path(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_path(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ProfitError::Io(_)));
    }
}
