//! Batch command - scan many receipt text files at once.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use bonscan_core::receipt::ReceiptScanner;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "receipts/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON results
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();
    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to scan",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let scanner = ReceiptScanner::new();
    let mut failed = 0usize;

    for path in &files {
        let outcome = scan_one(&scanner, path, &args.output_dir);
        if let Err(e) = outcome {
            failed += 1;
            warn!("Failed scanning {}: {}", path.display(), e);
            if !args.continue_on_error {
                pb.finish_and_clear();
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{} Scanned {} files ({} failed) in {:.1}s",
        style("✓").green(),
        files.len() - failed,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn scan_one(scanner: &ReceiptScanner, path: &Path, output_dir: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)?;
    let result = scanner.scan_checked(Some(&text))?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("receipt");
    let out_path = output_dir.join(format!("{stem}.json"));
    fs::write(&out_path, serde_json::to_string_pretty(&result)?)?;

    Ok(())
}
