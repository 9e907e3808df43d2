//! Scan command - extract items and totals from a single receipt file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use bonscan_core::models::receipt::ScanResult;
use bonscan_core::receipt::ReceiptScanner;
use bonscan_core::receipt::rules::format_german_amount;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input text file (OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Maximum input size in bytes
    #[arg(long)]
    max_input_len: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning file: {}", args.input.display());
    let text = fs::read_to_string(&args.input)?;

    let mut scanner = ReceiptScanner::new();
    if let Some(limit) = args.max_input_len {
        scanner = scanner.with_max_input_len(limit);
    }
    let result = scanner.scan_checked(Some(&text))?;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => render_text(&result),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!("{} Result written to {}", style("✓").green(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

pub fn render_text(result: &ScanResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", style("Items").bold()));
    if result.items.is_empty() {
        out.push_str("  (nothing recognized)\n");
    }
    for item in &result.items {
        out.push_str(&format!(
            "  {:<40} {:>8}\n",
            item.name,
            format_german_amount(item.price)
        ));
    }

    out.push_str(&format!(
        "{} {}\n",
        style("Calculated sum:").bold(),
        format_german_amount(result.calculated_sum)
    ));

    match (&result.raw_total, result.extracted_total) {
        (Some(raw), Some(_)) => {
            out.push_str(&format!("{} {}\n", style("Printed total:").bold(), raw));
        }
        _ => out.push_str("Printed total:  (none found)\n"),
    }

    if !result.removed_quantity_blocks.is_empty() {
        out.push_str(&format!(
            "Removed {} quantity block(s)\n",
            result.removed_quantity_blocks.len()
        ));
    }

    out
}
