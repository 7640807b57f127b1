//! CLI subcommands.

pub mod batch;
pub mod payers;

use std::fs;
use std::path::{Path, PathBuf};

/// Reconstruct a CNPJ from a payer subfolder name.
///
/// Folder names escape the CNPJ's `/` as `_` (directory contract of
/// the per-payer layout).
pub fn unescape_cnpj(folder_name: &str) -> String {
    folder_name.replace('_', "/")
}

/// List the PDF documents directly inside `dir`, in stable sorted
/// order.
pub fn list_pdfs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();
    Ok(files)
}
