#![no_main]

use libfuzzer_sys::fuzz_target;

use profitcalc_core::{compute, Inputs};

fuzz_target!(|data: &[u8]| {
    if data.len() < 65 {
        return;
    }
    let value = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        f64::from_le_bytes(bytes)
    };

    let inputs = Inputs {
        sale_price: value(0),
        quantity: value(1),
        commission_rate: value(2),
        shipping_cost_paid_by_seller: value(3),
        cogs: value(4),
        expenses: value(5),
        campaign_participation: data[64] & 1 == 1,
        campaign_discount_rate: value(6),
        platform_coverage_rate: value(7),
    };

    // Total over raw inputs: must not panic, even on NaN
    let _ = compute(&inputs);

    // Clamped inputs of moderate size give finite results
    let clamped = inputs.clamped();
    let out = compute(&clamped);
    let amounts = [
        clamped.sale_price,
        clamped.quantity,
        clamped.shipping_cost_paid_by_seller,
        clamped.cogs,
        clamped.expenses,
    ];
    if amounts.iter().all(|v| *v < 1e100) {
        assert!(out.profit.is_finite());
        assert!(out.adjusted_profit.is_finite());
    }
});
