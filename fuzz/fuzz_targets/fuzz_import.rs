#![no_main]

use libfuzzer_sys::fuzz_target;

use profitcalc_batch::{evaluate_records, export_string, import_str};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Malformed framing is an error, never a panic
    let Ok(records) = import_str(text) else {
        return;
    };

    let report = evaluate_records(records);
    for row in report.ledger.rows() {
        assert!(row.inputs.sale_price >= 0.0);
        assert!((0.0..=1.0).contains(&row.inputs.commission_rate));
        assert!((0.0..=1.0).contains(&row.inputs.platform_coverage_rate));
    }

    let exported = export_string(report.ledger.rows()).expect("export of imported rows");
    let again = import_str(&exported).expect("re-import of exported rows");
    assert_eq!(again.len(), report.ledger.len());
});
