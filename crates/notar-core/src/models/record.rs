//! Record types flowing through the extraction pipeline.
//!
//! One decoded document produces a [`CandidateRecord`], which the
//! classifier turns into either an [`Invoice`] or an [`ErrorRecord`].
//! The aggregator folds both into per-CNPJ [`ReportRecord`]s.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A positioned unit of decoded text on a page.
///
/// Coordinates are in the document's native page-unit system (top-left
/// origin), not pixels. The text is percent-encoded as handed over by
/// the decoder boundary; the extractor decodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// The raw, possibly-incomplete set of fields extracted from one
/// document, before validity classification.
///
/// A field is `None` when no fragment fell inside its zone, or (for the
/// amount) when the matched text was not numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateRecord {
    /// Document number (número da nota).
    pub document_number: Option<String>,
    /// Payer registration identifier (CNPJ).
    pub cnpj: Option<String>,
    /// Raw issue-date string, e.g. `15/03/2024` plus trailing detail.
    pub issue_date: Option<String>,
    /// Total amount, parsed.
    pub amount: Option<Decimal>,
}

/// A well-formed invoice (nota fiscal).
///
/// Created by the classifier once all required fields are present;
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Payer registration identifier (CNPJ).
    pub cnpj: String,
    /// Document number (número da nota).
    pub document_number: String,
    /// Total amount.
    pub amount: Decimal,
    /// Issue date as extracted, e.g. `15/03/2024`.
    pub issue_date: String,
}

/// Partial data for a document that failed classification, kept for
/// later inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The source document this record came from (file name).
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
}

/// Aggregated per-CNPJ output unit: the payer's invoices, its error
/// records, and the computed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Payer registration identifier (CNPJ).
    pub cnpj: String,
    /// Invoices in processing order.
    pub invoices: Vec<Invoice>,
    /// Error records in processing order.
    pub errors: Vec<ErrorRecord>,
    /// Sum of `invoices[*].amount`; zero when the payer has none.
    pub total: Decimal,
}

impl ReportRecord {
    /// Create an empty report for a payer.
    pub fn new(cnpj: impl Into<String>) -> Self {
        Self {
            cnpj: cnpj.into(),
            invoices: Vec::new(),
            errors: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Recompute `total` from the invoices currently attached.
    pub fn recompute_total(&mut self) {
        self.total = self.invoices.iter().map(|n| n.amount).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recompute_total_empty() {
        let mut report = ReportRecord::new("11.222.333/0001-44");
        report.recompute_total();
        assert_eq!(report.total, Decimal::ZERO);
    }

    #[test]
    fn test_recompute_total_sums_invoices() {
        let mut report = ReportRecord::new("11.222.333/0001-44");
        report.invoices.push(Invoice {
            cnpj: "11.222.333/0001-44".into(),
            document_number: "123".into(),
            amount: Decimal::new(10050, 2),
            issue_date: "15/03/2024".into(),
        });
        report.invoices.push(Invoice {
            cnpj: "11.222.333/0001-44".into(),
            document_number: "124".into(),
            amount: Decimal::new(5000, 2),
            issue_date: "16/03/2024".into(),
        });
        report.recompute_total();
        assert_eq!(report.total, Decimal::new(15050, 2));
    }

    #[test]
    fn test_error_record_serializes_without_absent_fields() {
        let erro = ErrorRecord {
            source: "nota_001.pdf".into(),
            cnpj: Some("11.222.333/0001-44".into()),
            document_number: None,
            amount: None,
            issue_date: None,
        };
        let json = serde_json::to_string(&erro).unwrap();
        assert!(json.contains("cnpj"));
        assert!(!json.contains("document_number"));
    }
}
