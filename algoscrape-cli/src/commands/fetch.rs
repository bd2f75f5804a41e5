//! Fetch command - fetch transactions and export them to CSV

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use algoscrape_core::{ExportOutcome, FetchResult, OperationResult, Provider};

use super::get_context;
use crate::output;

/// Rows shown by `--preview`
const PREVIEW_ROWS: usize = 20;

pub struct FetchArgs {
    pub provider: Provider,
    pub address: String,
    pub pages: Option<u32>,
    pub output: PathBuf,
    pub strict: bool,
    pub preview: bool,
    pub json: bool,
}

pub fn run(args: FetchArgs) -> Result<()> {
    let ctx = get_context()?;

    let result = if args.strict {
        ctx.fetch_service.fetch(args.provider, &args.address, args.pages)
    } else {
        Ok(ctx.fetch_service.fetch_or_empty(args.provider, &args.address, args.pages))
    };

    if args.json {
        return print_json(&ctx, result, &args);
    }

    let result = result?;

    if args.preview {
        print_preview(&result);
        return Ok(());
    }

    print_summary(&result, &args.address);

    match ctx.export_service.export(&result.records, &args.output)? {
        ExportOutcome::Empty => output::warning("Empty data, nothing written."),
        ExportOutcome::Written { path, rows } => {
            output::success(&format!("Wrote {} rows to {}", rows, path.display()));
        }
    }

    Ok(())
}

fn print_summary(result: &FetchResult, address: &str) {
    println!(
        "{} {} transactions for {} from {} ({} requests)",
        "Fetched:".green(),
        result.len(),
        address,
        result.provider,
        result.requests
    );
}

fn print_preview(result: &FetchResult) {
    if result.is_empty() {
        output::warning("No transactions found.");
        return;
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "From", "Amount"]);
    for (i, record) in result.records.iter().take(PREVIEW_ROWS).enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            record.from.clone(),
            output::format_amount(record.amount),
        ]);
    }
    println!("{table}");

    if result.len() > PREVIEW_ROWS {
        output::info(&format!("... and {} more", result.len() - PREVIEW_ROWS));
    }
}

/// Print the outcome as an `OperationResult`, exporting unless previewing
fn print_json(
    ctx: &algoscrape_core::AlgoscrapeContext,
    result: algoscrape_core::Result<FetchResult>,
    args: &FetchArgs,
) -> Result<()> {
    let report: OperationResult<FetchResult> = match result {
        Ok(fetched) if args.preview => OperationResult::ok(fetched),
        Ok(fetched) => {
            let outcome = ctx.export_service.export(&fetched.records, &args.output)?;
            let mut context = HashMap::new();
            context.insert("export".to_string(), serde_json::to_value(&outcome)?);
            OperationResult::ok_with_context(fetched, context)
        }
        Err(e) => OperationResult::from(algoscrape_core::Result::<FetchResult>::Err(e)),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.success {
        Ok(())
    } else {
        anyhow::bail!("Fetch failed")
    }
}
