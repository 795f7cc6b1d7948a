//! Golden file integration tests.
//!
//! Reads tests/testdata/scenarios_golden.json and checks the engine, the
//! aggregator and the file cycle against hand-checked figures.

use std::collections::HashMap;

use serde::Deserialize;

use profitcalc_batch::{evaluate_records, export_string, import_str};
use profitcalc_core::{compute, summarize, BulkRow, Inputs, Outputs, RowId, Summary};
use profitcalc_tests::{approx_eq, output_fields, summary_fields};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    listings: Vec<GoldenListing>,
    summary: GoldenSummary,
}

#[derive(Deserialize)]
struct GoldenListing {
    name: String,
    inputs: Inputs,
    outputs: Outputs,
}

#[derive(Deserialize)]
struct GoldenSummary {
    listings: Vec<String>,
    expected: Summary,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/scenarios_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn assert_outputs(name: &str, actual: &Outputs, expected: &Outputs) {
    for ((field, a), (_, e)) in output_fields(actual).into_iter().zip(output_fields(expected)) {
        assert!(approx_eq(a, e), "{name}: {field} = {a}, expected {e}");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_loads() {
    let data = load_golden_data();
    assert!(data.listings.len() >= 4);
}

#[test]
fn engine_matches_golden() {
    for listing in load_golden_data().listings {
        assert_outputs(&listing.name, &compute(&listing.inputs), &listing.outputs);
    }
}

#[test]
fn engine_is_repeatable() {
    for listing in load_golden_data().listings {
        assert_eq!(compute(&listing.inputs), compute(&listing.inputs), "{}", listing.name);
    }
}

#[test]
fn summary_matches_golden() {
    let data = load_golden_data();
    let by_name: HashMap<&str, &GoldenListing> =
        data.listings.iter().map(|l| (l.name.as_str(), l)).collect();

    let rows: Vec<BulkRow> = data
        .summary
        .listings
        .iter()
        .map(|name| {
            let listing = by_name[name.as_str()];
            BulkRow::new(RowId::new(), Some(listing.name.clone()), listing.inputs)
        })
        .collect();

    let actual = summarize(&rows);
    for ((field, a), (_, e)) in summary_fields(&actual)
        .into_iter()
        .zip(summary_fields(&data.summary.expected))
    {
        assert!(approx_eq(a, e), "summary {field} = {a}, expected {e}");
    }
}

#[test]
fn summary_of_reversed_rows_is_the_same() {
    let data = load_golden_data();
    let mut rows: Vec<BulkRow> = data
        .listings
        .iter()
        .map(|l| BulkRow::new(RowId::new(), None, l.inputs))
        .collect();
    let forward = summarize(&rows);
    rows.reverse();
    let backward = summarize(&rows);
    for ((field, a), (_, b)) in summary_fields(&forward)
        .into_iter()
        .zip(summary_fields(&backward))
    {
        assert!(approx_eq(a, b), "{field}: {a} != {b}");
    }
}

#[test]
fn file_cycle_matches_golden() {
    let data = load_golden_data();
    let rows: Vec<BulkRow> = data
        .listings
        .iter()
        .map(|l| BulkRow::new(RowId::new(), Some(l.name.clone()), l.inputs))
        .collect();

    let text = export_string(&rows).expect("export failed");
    let report = evaluate_records(import_str(&text).expect("import failed"));

    assert_eq!(report.ledger.len(), data.listings.len());
    for (row, listing) in report.ledger.rows().iter().zip(&data.listings) {
        assert_eq!(row.label.as_deref(), Some(listing.name.as_str()));
        assert_outputs(&listing.name, &row.outputs, &listing.outputs);
    }
}
