//! Report rendering and file output.
//!
//! The core hands over an ordered sequence of `ReportRecord`s; this
//! module is the consuming collaborator that snapshots them as JSON
//! and renders the human-readable HTML document. File names are keyed
//! by the run timestamp.

pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use notar_core::ReportRecord;

/// Write the JSON snapshot and the HTML report into `output_dir`,
/// creating it if needed. Returns the two file paths.
pub fn write_reports(
    reports: &[ReportRecord],
    output_dir: &Path,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(output_dir)?;

    let stamp = Local::now().format("%d-%m-%Y-%H-%M-%S");

    let json_path = output_dir.join(format!("relatorios_{stamp}.json"));
    fs::write(&json_path, serde_json::to_string_pretty(reports)?)?;

    let html_path = output_dir.join(format!("relatorios_{stamp}.html"));
    fs::write(&html_path, html::render(reports))?;

    Ok((json_path, html_path))
}
