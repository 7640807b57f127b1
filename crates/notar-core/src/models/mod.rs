//! Data models for positional extraction and per-CNPJ reporting.

pub mod record;

pub use record::{CandidateRecord, ErrorRecord, Invoice, ReportRecord, TextFragment};
