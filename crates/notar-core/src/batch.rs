//! Sequential batch driver.
//!
//! Documents are processed one at a time in the order given. A decode
//! failure is logged and the file recorded as unreadable; it never
//! aborts the batch. Aggregation happens strictly after all
//! per-document work, in the caller.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::classify::{Classification, classify};
use crate::dates::in_range;
use crate::decode::PageDecoder;
use crate::extract::{NFSE_ZONES, extract};
use crate::models::{ErrorRecord, Invoice};

/// Everything one batch run produced, before aggregation.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub invoices: Vec<Invoice>,
    pub errors: Vec<ErrorRecord>,
    /// Documents the decoder could not read; skipped.
    pub unreadable: Vec<PathBuf>,
}

impl BatchOutcome {
    /// Number of documents that produced any record at all.
    pub fn classified(&self) -> usize {
        self.invoices.len() + self.errors.len()
    }

    /// Fold another outcome into this one, preserving order.
    pub fn merge(&mut self, other: BatchOutcome) {
        self.invoices.extend(other.invoices);
        self.errors.extend(other.errors);
        self.unreadable.extend(other.unreadable);
    }

    /// Drop invoices whose issue date falls outside the inclusive
    /// range. Error records are untouched: an extraction failure stays
    /// visible for inspection whatever its (possibly absent) date
    /// says.
    pub fn retain_invoices_in_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.invoices
            .retain(|nota| in_range(&nota.issue_date, start, end));
    }
}

/// Decode, extract, and classify each document in order.
///
/// `cnpj_hint` is the payer identifier already known from context (the
/// per-payer-subfolder workflow); it backfills records whose CNPJ zone
/// yielded nothing.
pub fn process_documents(
    decoder: &dyn PageDecoder,
    paths: &[PathBuf],
    cnpj_hint: Option<&str>,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        let page = match decoder.decode_first_page(path) {
            Ok(page) => page,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable document");
                outcome.unreadable.push(path.clone());
                continue;
            }
        };

        let candidate = extract(&page.fragments, &NFSE_ZONES);
        debug!(path = %path.display(), ?candidate, "extracted candidate");

        match classify(candidate, document_name(path), cnpj_hint) {
            Classification::Invoice(nota) => outcome.invoices.push(nota),
            Classification::Error(erro) => outcome.errors.push(erro),
        }
    }

    outcome
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
