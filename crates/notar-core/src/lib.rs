//! Core library for NFS-e report generation.
//!
//! This crate provides:
//! - PDF decoding into positioned text fragments (first page only)
//! - Positional field extraction against a fixed zone catalog
//! - Classification of candidates into invoices or error records
//! - Issue-date range filtering
//! - Per-CNPJ aggregation into report records with running totals

pub mod aggregate;
pub mod batch;
pub mod classify;
pub mod dates;
pub mod decode;
pub mod error;
pub mod extract;
pub mod models;

pub use aggregate::{UNKNOWN_PAYER, aggregate};
pub use batch::{BatchOutcome, process_documents};
pub use classify::{Classification, classify};
pub use dates::{in_range, normalize_issue_date, parse_range_date};
pub use decode::{DecodedPage, PageDecoder, PdfFragmentDecoder};
pub use error::{DecodeError, NotarError, Result};
pub use extract::{Field, NFSE_ZONES, Zone, extract};
pub use models::{CandidateRecord, ErrorRecord, Invoice, ReportRecord, TextFragment};
