//! Document decoder boundary.
//!
//! The extraction core does not care how a document turns into
//! positioned text fragments; it consumes [`DecodedPage`]s through the
//! [`PageDecoder`] trait. The production implementation is the
//! lopdf-backed [`PdfFragmentDecoder`]; tests substitute in-memory
//! decoders.

pub mod pdf;

use std::path::Path;

use crate::error::DecodeError;
use crate::models::TextFragment;

pub use pdf::PdfFragmentDecoder;

/// The first page of a decoded document.
///
/// Only the first page is consulted; the NFS-e template is
/// single-page.
#[derive(Debug, Clone, Default)]
pub struct DecodedPage {
    /// Text fragments in content-stream order. Text is percent-encoded
    /// per the boundary contract.
    pub fragments: Vec<TextFragment>,
}

/// Decodes one document into its first page of positioned text
/// fragments.
pub trait PageDecoder {
    fn decode_first_page(&self, path: &Path) -> Result<DecodedPage, DecodeError>;
}
