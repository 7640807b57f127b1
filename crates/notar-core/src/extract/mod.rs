//! Positional field extraction.
//!
//! The extractor is a pure function from one document's positioned
//! text fragments and a zone catalog to a [`CandidateRecord`]. It has
//! no knowledge of PDF decoding or batch state, so it can be tested in
//! isolation with hand-built fragments.

pub mod zones;

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use crate::models::{CandidateRecord, TextFragment};

pub use zones::{Field, NFSE_ZONES, Zone};

/// Assign each fragment to a semantic field by coordinate-zone
/// membership, producing the raw candidate record for one document.
///
/// Fragments matching no zone are ignored; an empty or all-unmatched
/// page yields an empty record. When multiple fragments match the same
/// zone, the last one in scan order overwrites earlier ones.
pub fn extract(fragments: &[TextFragment], zones: &[Zone]) -> CandidateRecord {
    let mut candidate = CandidateRecord::default();

    for fragment in fragments {
        for zone in zones {
            if !zone.contains(fragment.x, fragment.y) {
                continue;
            }

            let text = decode_fragment_text(&fragment.text);
            trace!(field = ?zone.field, x = fragment.x, y = fragment.y, %text, "fragment matched zone");

            match zone.field {
                Field::DocumentNumber => candidate.document_number = Some(text),
                Field::Cnpj => candidate.cnpj = Some(text),
                Field::IssueDate => candidate.issue_date = Some(text),
                // A non-numeric amount is field-absent, not an error.
                Field::Amount => candidate.amount = parse_amount(&text),
            }
        }
    }

    candidate
}

/// Decode the percent-encoded text the decoder boundary hands over.
///
/// Malformed encodings fall back to the raw text rather than failing
/// the document.
pub fn decode_fragment_text(text: &str) -> String {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| text.to_string())
}

/// Parse a monetary amount from decoded fragment text.
///
/// Accepts plain decimal-point amounts (`1234.56`) and Brazilian
/// formatting (`R$ 1.234,56`). Returns `None` when the text is not
/// numeric.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned = text
        .trim()
        .trim_start_matches("R$")
        .replace([' ', '\u{00a0}'], "");

    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        // Brazilian format: '.' is a thousands separator, ',' decimal.
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zones() -> &'static [Zone] {
        &NFSE_ZONES
    }

    #[test]
    fn test_assigns_fields_by_zone() {
        let fragments = vec![
            TextFragment::new(32.5, 1.5, "123"),
            TextFragment::new(22.5, 13.5, "11.222.333%2F0001-44"),
            TextFragment::new(31.5, 13.5, "15%2F03%2F2024"),
            TextFragment::new(34.5, 21.5, "100.50"),
        ];

        let candidate = extract(&fragments, zones());

        assert_eq!(candidate.document_number.as_deref(), Some("123"));
        assert_eq!(candidate.cnpj.as_deref(), Some("11.222.333/0001-44"));
        assert_eq!(candidate.issue_date.as_deref(), Some("15/03/2024"));
        assert_eq!(candidate.amount, Some(Decimal::new(10050, 2)));
    }

    #[test]
    fn test_fragment_on_zone_boundary_matches() {
        let fragments = vec![TextFragment::new(32.0, 1.0, "123")];
        let candidate = extract(&fragments, zones());
        assert_eq!(candidate.document_number.as_deref(), Some("123"));

        let fragments = vec![TextFragment::new(33.0, 2.0, "456")];
        let candidate = extract(&fragments, zones());
        assert_eq!(candidate.document_number.as_deref(), Some("456"));
    }

    #[test]
    fn test_last_matching_fragment_wins() {
        let fragments = vec![
            TextFragment::new(32.2, 1.2, "first"),
            TextFragment::new(32.8, 1.8, "second"),
        ];
        let candidate = extract(&fragments, zones());
        assert_eq!(candidate.document_number.as_deref(), Some("second"));
    }

    #[test]
    fn test_unmatched_fragments_are_ignored() {
        let fragments = vec![
            TextFragment::new(5.0, 5.0, "prefeitura"),
            TextFragment::new(40.0, 40.0, "rodape"),
        ];
        let candidate = extract(&fragments, zones());
        assert_eq!(candidate, CandidateRecord::default());
    }

    #[test]
    fn test_empty_page_yields_empty_candidate() {
        let candidate = extract(&[], zones());
        assert_eq!(candidate, CandidateRecord::default());
    }

    #[test]
    fn test_non_numeric_amount_is_absent() {
        let fragments = vec![TextFragment::new(34.5, 21.5, "isento")];
        let candidate = extract(&fragments, zones());
        assert_eq!(candidate.amount, None);
    }

    #[test]
    fn test_parse_amount_brazilian_format() {
        assert_eq!(parse_amount("R$ 1.234,56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parse_amount("100,50"), Some(Decimal::new(10050, 2)));
    }

    #[test]
    fn test_parse_amount_plain_format() {
        assert_eq!(parse_amount("1234.56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_decode_fragment_text() {
        assert_eq!(decode_fragment_text("15%2F03%2F2024"), "15/03/2024");
        assert_eq!(decode_fragment_text("plain"), "plain");
    }
}
