//! CLI result presenters: aligned text and JSON.

use std::fmt::Write as _;

use serde::Serialize;

use profitcalc_batch::interfaces::ReportPresenter;
use profitcalc_core::{BulkRow, Inputs, Outputs, Summary};

use crate::output::{format_currency, format_percent, format_quantity};
use crate::ui;

/// Text presenter for terminals.
pub struct CLIReportPresenter {
    currency: String,
    verbose: bool,
    quiet: bool,
}

impl CLIReportPresenter {
    #[must_use]
    pub fn new(currency: impl Into<String>, verbose: bool, quiet: bool) -> Self {
        Self {
            currency: currency.into(),
            verbose,
            quiet,
        }
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, &self.currency)
    }

    /// Render one listing as aligned lines.
    #[must_use]
    pub fn render_single(&self, label: Option<&str>, inputs: &Inputs, out: &Outputs) -> String {
        if self.quiet {
            return format!("{:.2}\t{:.2}\n", out.profit, out.adjusted_profit);
        }

        let mut s = String::new();
        if let Some(label) = label {
            let _ = writeln!(s, "Listing: {label}");
        }
        let _ = writeln!(s, "Standard sale");
        line(&mut s, "Gross revenue", &self.money(out.gross_revenue));
        line(&mut s, "Commission fee", &self.money(-out.commission_fee));
        line(&mut s, "Net revenue", &self.money(out.net_revenue_after_commission));
        line(&mut s, "Operating net", &self.money(out.net_revenue_after_costs));
        line(&mut s, "Profit", &ui::signed(self.money(out.profit), out.profit));
        line(&mut s, "Margin", &format_percent(out.profit_margin));

        if inputs.campaign_participation || self.verbose {
            let _ = writeln!(
                s,
                "Campaign ({} off, platform covers {})",
                format_percent(inputs.campaign_discount_rate),
                format_percent(inputs.platform_coverage_rate)
            );
            line(&mut s, "Discount", &self.money(out.discount_amount));
            line(&mut s, "Seller contribution", &self.money(-out.seller_funded_discount));
            line(&mut s, "Platform subsidy", &self.money(out.platform_funded_discount));
            line(&mut s, "Adjusted gross", &self.money(out.adjusted_gross_revenue));
            line(&mut s, "Adjusted commission", &self.money(-out.adjusted_commission_fee));
            if self.verbose {
                line(
                    &mut s,
                    "Adjusted net revenue",
                    &self.money(out.adjusted_net_revenue_after_commission),
                );
                line(
                    &mut s,
                    "Adjusted operating net",
                    &self.money(out.adjusted_net_revenue_after_costs),
                );
            }
            line(
                &mut s,
                "Adjusted profit",
                &ui::signed(self.money(out.adjusted_profit), out.adjusted_profit),
            );
            line(&mut s, "Adjusted margin", &format_percent(out.adjusted_profit_margin));
        }
        s
    }

    /// Render rows as a table.
    #[must_use]
    pub fn render_rows(&self, rows: &[BulkRow]) -> String {
        if self.quiet {
            return String::new();
        }
        let mut s = String::new();
        let _ = writeln!(
            s,
            "{:<16} {:>12} {:>8} {:>8} {:>5} {:>16} {:>16}",
            "Ref", "Unit price", "Qty", "Comm", "Camp", "Profit", "Adj. profit"
        );
        let _ = writeln!(s, "{:-<87}", "");
        for row in rows {
            let _ = writeln!(
                s,
                "{:<16} {:>12.2} {:>8} {:>8} {:>5} {:>16} {:>16}",
                truncate(row.label.as_deref().unwrap_or("UNIT"), 16),
                row.inputs.sale_price,
                format_quantity(row.inputs.quantity),
                format_percent(row.inputs.commission_rate),
                if row.inputs.campaign_participation { "yes" } else { "no" },
                self.money(row.outputs.profit),
                self.money(row.outputs.adjusted_profit),
            );
            if self.verbose {
                let _ = writeln!(s, "{:<16} id {}", "", row.id);
            }
        }
        s
    }

    /// Render a summary block.
    #[must_use]
    pub fn render_summary(&self, summary: &Summary) -> String {
        if self.quiet {
            return format!("{:.2}\t{:.2}\n", summary.profit, summary.adjusted_profit);
        }
        let mut s = String::new();
        line(&mut s, "Rows", &summary.row_count.to_string());
        line(&mut s, "Units", &format_quantity(summary.quantity));
        line(&mut s, "Gross revenue", &self.money(summary.gross_revenue));
        line(&mut s, "Commission", &self.money(summary.commission_fee));
        line(&mut s, "Profit", &ui::signed(self.money(summary.profit), summary.profit));
        line(&mut s, "Average margin", &format_percent(summary.avg_profit_margin));
        line(&mut s, "Campaign gross", &self.money(summary.adjusted_gross_revenue));
        line(&mut s, "Campaign discount", &self.money(summary.discount_amount));
        if self.verbose {
            line(&mut s, "Seller funded", &self.money(summary.seller_funded_discount));
            line(&mut s, "Platform funded", &self.money(summary.platform_funded_discount));
            line(&mut s, "Adjusted commission", &self.money(summary.adjusted_commission_fee));
        }
        line(
            &mut s,
            "Adjusted profit",
            &ui::signed(self.money(summary.adjusted_profit), summary.adjusted_profit),
        );
        line(
            &mut s,
            "Adjusted avg margin",
            &format_percent(summary.avg_adjusted_profit_margin),
        );
        s
    }
}

impl ReportPresenter for CLIReportPresenter {
    fn present_single(&self, label: Option<&str>, inputs: &Inputs, outputs: &Outputs) {
        print!("{}", self.render_single(label, inputs, outputs));
    }

    fn present_rows(&self, rows: &[BulkRow]) {
        print!("{}", self.render_rows(rows));
    }

    fn present_summary(&self, summary: &Summary) {
        if !self.quiet {
            ui::print_header("Summary");
        }
        print!("{}", self.render_summary(summary));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// JSON presenter: one pretty-printed document per call.
pub struct JsonReportPresenter;

#[derive(Serialize)]
struct SingleDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    inputs: &'a Inputs,
    outputs: &'a Outputs,
}

impl JsonReportPresenter {
    fn emit<T: Serialize>(value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize report"),
        }
    }
}

impl ReportPresenter for JsonReportPresenter {
    fn present_single(&self, label: Option<&str>, inputs: &Inputs, outputs: &Outputs) {
        Self::emit(&SingleDocument {
            label,
            inputs,
            outputs,
        });
    }

    fn present_rows(&self, rows: &[BulkRow]) {
        Self::emit(&rows);
    }

    fn present_summary(&self, summary: &Summary) {
        Self::emit(summary);
    }

    fn present_error(&self, error: &str) {
        Self::emit(&serde_json::json!({ "error": error }));
    }
}

fn line(s: &mut String, label: &str, value: &str) {
    let _ = writeln!(s, "  {label:<24} {value:>20}");
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
