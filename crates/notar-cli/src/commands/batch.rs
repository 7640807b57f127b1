//! Batch command - process a flat folder of PDFs with a date range.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use notar_core::{
    BatchOutcome, PdfFragmentDecoder, aggregate, parse_range_date, process_documents,
};

use super::list_pdfs;
use crate::report;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Folder containing the PDF documents
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Start of the issue-date range (DD-MM-YYYY, inclusive)
    #[arg(short, long)]
    start: String,

    /// End of the issue-date range (DD-MM-YYYY, inclusive)
    #[arg(short, long)]
    end: String,

    /// Output directory for the report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let started = Instant::now();

    // An invalid range bound is fatal before any document is touched.
    let start = parse_range_date(&args.start)?;
    let end = parse_range_date(&args.end)?;

    let files = list_pdfs(&args.dir)?;
    if files.is_empty() {
        anyhow::bail!("no PDF documents found in {}", args.dir.display());
    }

    println!(
        "{} Found {} documents to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")
            .unwrap()
            .progress_chars("=>-"),
    );

    let decoder = PdfFragmentDecoder::new();
    let mut outcome = BatchOutcome::default();

    for file in &files {
        outcome.merge(process_documents(&decoder, std::slice::from_ref(file), None));
        pb.inc(1);
    }
    pb.finish_and_clear();

    // The date filter applies to the invoice branch only.
    let before = outcome.invoices.len();
    outcome.retain_invoices_in_range(start, end);
    info!(
        kept = outcome.invoices.len(),
        dropped = before - outcome.invoices.len(),
        "applied issue-date filter"
    );

    let reports = aggregate(&outcome.invoices, &outcome.errors);
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| args.dir.join("relatorios"));
    let (json_path, html_path) = report::write_reports(&reports, &output_dir)?;

    println!(
        "{} {} payers, {} invoices, {} errors in {:.1?}",
        style("✓").green(),
        reports.len(),
        outcome.invoices.len(),
        outcome.errors.len(),
        started.elapsed()
    );
    if !outcome.unreadable.is_empty() {
        println!(
            "{} {} unreadable documents skipped",
            style("⚠").yellow(),
            outcome.unreadable.len()
        );
    }
    println!("{} Reports written to {}", style("✓").green(), json_path.display());
    println!("{}                    {}", style(" ").dim(), html_path.display());

    Ok(())
}
