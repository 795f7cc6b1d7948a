//! CLI output formatting.

use std::time::Duration;

/// Currency code used when none is configured.
pub const DEFAULT_CURRENCY: &str = "SAR";

/// Format an amount as `CODE 1,234.50`, negatives as `-CODE 1,234.50`.
#[must_use]
pub fn format_currency(value: f64, code: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{code} {}.{cents}", group_thousands(whole))
}

/// Format a fraction as a percentage with two decimals: `0.3` → `30.00%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a quantity: whole numbers with separators, otherwise two decimals.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let whole = format!("{:.0}", value.abs());
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}{}", group_thousands(&whole))
    } else {
        format!("{value:.2}")
    }
}

/// Insert `,` every three digits of an unsigned digit string.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}
