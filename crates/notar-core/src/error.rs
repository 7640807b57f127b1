//! Error types for the notar-core library.

use thiserror::Error;

/// Main error type for the notar library.
#[derive(Error, Debug)]
pub enum NotarError {
    /// PDF decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A user-supplied date-range bound could not be parsed.
    ///
    /// This is the only batch-fatal error kind; everything that goes
    /// wrong with an individual document degrades to an [`ErrorRecord`]
    /// or a skip instead.
    ///
    /// [`ErrorRecord`]: crate::models::ErrorRecord
    #[error("invalid date '{input}': expected {expected}")]
    DateRange { input: String, expected: &'static str },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the PDF decoder boundary.
///
/// All of these are per-document: the batch driver logs them, records
/// the file as unreadable, and continues with the next document.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The first page's content stream could not be read or decoded.
    #[error("failed to read page content: {0}")]
    Content(String),
}

/// Result type for the notar library.
pub type Result<T> = std::result::Result<T, NotarError>;
