//! Payers command - process per-payer subfolders.
//!
//! The base directory's immediate subdirectories are named after a
//! CNPJ with `/` escaped as `_`; each holds that payer's documents.
//! No date filtering happens in this workflow.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use notar_core::{BatchOutcome, PdfFragmentDecoder, aggregate, process_documents};

use super::list_pdfs;
use crate::report;

/// Arguments for the payers command.
#[derive(Args)]
pub struct PayersArgs {
    /// Base directory with one subfolder per CNPJ
    #[arg(default_value = ".")]
    base_dir: PathBuf,

    /// Output directory for the report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub async fn run(args: PayersArgs) -> anyhow::Result<()> {
    let started = Instant::now();

    let mut subfolders: Vec<PathBuf> = fs::read_dir(&args.base_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subfolders.sort();

    if subfolders.is_empty() {
        anyhow::bail!("no payer subfolders found in {}", args.base_dir.display());
    }

    println!(
        "{} Found {} payer folders",
        style("ℹ").blue(),
        subfolders.len()
    );

    let pb = ProgressBar::new(subfolders.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} payers {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let decoder = PdfFragmentDecoder::new();
    let mut combined = BatchOutcome::default();

    for folder in &subfolders {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let cnpj = super::unescape_cnpj(&name);
        pb.set_message(cnpj.clone());

        let files = list_pdfs(folder)?;
        if files.is_empty() {
            warn!(folder = %folder.display(), "payer folder has no documents");
            pb.inc(1);
            continue;
        }

        let outcome = process_documents(&decoder, &files, Some(&cnpj));
        info!(
            %cnpj,
            invoices = outcome.invoices.len(),
            errors = outcome.errors.len(),
            "processed payer folder"
        );
        combined.merge(outcome);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let reports = aggregate(&combined.invoices, &combined.errors);
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| args.base_dir.join("relatorios"));
    let (json_path, html_path) = report::write_reports(&reports, &output_dir)?;

    println!(
        "{} {} payers, {} invoices, {} errors in {:.1?}",
        style("✓").green(),
        reports.len(),
        combined.invoices.len(),
        combined.errors.len(),
        started.elapsed()
    );
    if !combined.unreadable.is_empty() {
        println!(
            "{} {} unreadable documents skipped",
            style("⚠").yellow(),
            combined.unreadable.len()
        );
    }
    println!("{} Reports written to {}", style("✓").green(), json_path.display());
    println!("{}                    {}", style(" ").dim(), html_path.display());

    Ok(())
}
