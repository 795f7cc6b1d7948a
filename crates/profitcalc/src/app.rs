//! Application entry point and dispatch.

use anyhow::{Context, Result};

use profitcalc_batch::interfaces::ReportPresenter;
use profitcalc_batch::{evaluate_records, export_path, import_path};
use profitcalc_cli::output::{format_duration, format_percent};
use profitcalc_cli::{CLIReportPresenter, JsonReportPresenter};
use profitcalc_core::{compute, Category, Ledger, ProfitError, RowId};

use crate::config::{AppConfig, BulkArgs, Command, SingleArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        profitcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    match &config.command {
        Some(Command::Single(args)) => run_single(config, args),
        Some(Command::Bulk(args)) => run_bulk(config, args),
        Some(Command::Rates) => run_rates(config),
        None => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

/// Presenter for results and errors, chosen by the output flags.
pub fn presenter(config: &AppConfig) -> Box<dyn ReportPresenter> {
    if config.json {
        Box::new(JsonReportPresenter)
    } else {
        Box::new(CLIReportPresenter::new(
            config.currency.clone(),
            config.verbose,
            config.quiet,
        ))
    }
}

fn run_single(config: &AppConfig, args: &SingleArgs) -> Result<()> {
    let inputs = args.inputs();
    let outputs = compute(&inputs);
    tracing::debug!(profit = outputs.profit, adjusted = outputs.adjusted_profit, "computed");
    presenter(config).present_single(args.label.as_deref(), &inputs, &outputs);
    Ok(())
}

fn run_bulk(config: &AppConfig, args: &BulkArgs) -> Result<()> {
    let records = import_path(&args.input)
        .with_context(|| format!("failed to import {}", args.input.display()))?;

    let report = evaluate_records(records);
    let mut ledger = report.ledger;

    for _ in 0..args.blank {
        ledger.push_blank();
    }
    for edit in &args.edits {
        let id = find_row(&ledger, &edit.label)?;
        ledger.update(id, edit.update)?;
    }
    for label in &args.drops {
        let id = find_row(&ledger, label)?;
        ledger.remove(id)?;
    }

    let summary = ledger.summary();
    let presenter = presenter(config);
    if !args.summary_only {
        presenter.present_rows(ledger.rows());
    }
    presenter.present_summary(&summary);

    if let Some(path) = &args.output {
        export_path(ledger.rows(), path)
            .with_context(|| format!("failed to export {}", path.display()))?;
        if config.verbose && !config.json {
            eprintln!("Wrote {} rows to {}", ledger.len(), path.display());
        }
    }

    if config.verbose && !config.json {
        eprintln!("Evaluated in {}", format_duration(report.duration));
    }
    Ok(())
}

/// Resolve a row label to its identity; the first match wins.
fn find_row(ledger: &Ledger, label: &str) -> Result<RowId, ProfitError> {
    ledger
        .rows()
        .iter()
        .find(|row| row.label.as_deref() == Some(label))
        .map(|row| row.id)
        .ok_or_else(|| ProfitError::Config(format!("no row labelled {label:?}")))
}

fn run_rates(config: &AppConfig) -> Result<()> {
    if config.json {
        let rates: Vec<_> = Category::ALL
            .iter()
            .map(|c| serde_json::json!({ "category": c.name(), "rate": c.rate() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rates)?);
        return Ok(());
    }

    if !config.quiet {
        profitcalc_cli::ui::print_header("Commission rates");
    }
    for category in Category::ALL {
        println!("  {:<16} {:>8}", category.name(), format_percent(category.rate()));
    }
    Ok(())
}
