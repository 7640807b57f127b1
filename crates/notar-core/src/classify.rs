//! Candidate record classification.
//!
//! A pure decision: a candidate either carries everything a
//! well-formed invoice needs, or it degrades to an [`ErrorRecord`]
//! holding whatever was extracted. Nothing here raises.

use rust_decimal::Decimal;

use crate::aggregate::UNKNOWN_PAYER;
use crate::models::{CandidateRecord, ErrorRecord, Invoice};

/// Outcome of classifying one document's candidate record.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Invoice(Invoice),
    Error(ErrorRecord),
}

/// Classify a candidate record as a valid invoice or an error record.
///
/// A candidate is a valid invoice iff document number, issue date, and
/// amount are all present and non-empty. A zero amount classifies as
/// an error record; that behavior is part of the template contract
/// this system reproduces (zero-amount notas are routed to manual
/// review alongside extraction failures).
///
/// `cnpj_hint` backfills the payer identifier when the CNPJ zone
/// yielded nothing (the per-payer-subfolder workflow knows the payer
/// from the folder name). With neither zone text nor hint, an invoice
/// groups under [`UNKNOWN_PAYER`], the same key error records use.
pub fn classify(
    candidate: CandidateRecord,
    source: impl Into<String>,
    cnpj_hint: Option<&str>,
) -> Classification {
    let cnpj = candidate
        .cnpj
        .filter(|c| !c.is_empty())
        .or_else(|| cnpj_hint.map(str::to_string));

    let complete = matches!(
        (&candidate.document_number, &candidate.issue_date, candidate.amount),
        (Some(numero), Some(data), Some(valor))
            if !numero.is_empty() && !data.is_empty() && valor != Decimal::ZERO
    );

    if complete {
        Classification::Invoice(Invoice {
            cnpj: cnpj.unwrap_or_else(|| UNKNOWN_PAYER.to_string()),
            document_number: candidate.document_number.unwrap_or_default(),
            amount: candidate.amount.unwrap_or_default(),
            issue_date: candidate.issue_date.unwrap_or_default(),
        })
    } else {
        Classification::Error(ErrorRecord {
            source: source.into(),
            cnpj,
            document_number: candidate.document_number.filter(|n| !n.is_empty()),
            amount: candidate.amount,
            issue_date: candidate.issue_date.filter(|d| !d.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_candidate() -> CandidateRecord {
        CandidateRecord {
            document_number: Some("123".into()),
            cnpj: Some("11.222.333/0001-44".into()),
            issue_date: Some("15/03/2024".into()),
            amount: Some(Decimal::new(10050, 2)),
        }
    }

    #[test]
    fn test_complete_candidate_is_invoice() {
        let result = classify(complete_candidate(), "nota_001.pdf", None);
        match result {
            Classification::Invoice(nota) => {
                assert_eq!(nota.cnpj, "11.222.333/0001-44");
                assert_eq!(nota.document_number, "123");
                assert_eq!(nota.amount, Decimal::new(10050, 2));
                assert_eq!(nota.issue_date, "15/03/2024");
            }
            Classification::Error(erro) => panic!("expected invoice, got {erro:?}"),
        }
    }

    #[test]
    fn test_missing_amount_is_error() {
        let candidate = CandidateRecord {
            amount: None,
            ..complete_candidate()
        };
        let result = classify(candidate, "nota_002.pdf", None);
        match result {
            Classification::Error(erro) => {
                assert_eq!(erro.source, "nota_002.pdf");
                assert_eq!(erro.document_number.as_deref(), Some("123"));
                assert_eq!(erro.amount, None);
            }
            Classification::Invoice(nota) => panic!("expected error, got {nota:?}"),
        }
    }

    #[test]
    fn test_zero_amount_is_error() {
        let candidate = CandidateRecord {
            amount: Some(Decimal::ZERO),
            ..complete_candidate()
        };
        let result = classify(candidate, "nota_003.pdf", None);
        assert!(matches!(result, Classification::Error(_)));
    }

    #[test]
    fn test_empty_document_number_is_error() {
        let candidate = CandidateRecord {
            document_number: Some(String::new()),
            ..complete_candidate()
        };
        let result = classify(candidate, "nota_004.pdf", None);
        match result {
            Classification::Error(erro) => assert_eq!(erro.document_number, None),
            Classification::Invoice(nota) => panic!("expected error, got {nota:?}"),
        }
    }

    #[test]
    fn test_cnpj_hint_backfills_missing_cnpj() {
        let candidate = CandidateRecord {
            cnpj: None,
            ..complete_candidate()
        };
        let result = classify(candidate, "nota_005.pdf", Some("99.888.777/0001-00"));
        match result {
            Classification::Invoice(nota) => assert_eq!(nota.cnpj, "99.888.777/0001-00"),
            Classification::Error(erro) => panic!("expected invoice, got {erro:?}"),
        }
    }

    #[test]
    fn test_invoice_without_any_cnpj_groups_under_unknown() {
        let candidate = CandidateRecord {
            cnpj: None,
            ..complete_candidate()
        };
        let result = classify(candidate, "nota_007.pdf", None);
        match result {
            Classification::Invoice(nota) => assert_eq!(nota.cnpj, UNKNOWN_PAYER),
            Classification::Error(erro) => panic!("expected invoice, got {erro:?}"),
        }
    }

    #[test]
    fn test_extracted_cnpj_wins_over_hint() {
        let result = classify(complete_candidate(), "nota_006.pdf", Some("99.888.777/0001-00"));
        match result {
            Classification::Invoice(nota) => assert_eq!(nota.cnpj, "11.222.333/0001-44"),
            Classification::Error(erro) => panic!("expected invoice, got {erro:?}"),
        }
    }

    #[test]
    fn test_empty_candidate_keeps_only_source() {
        let result = classify(CandidateRecord::default(), "vazio.pdf", None);
        match result {
            Classification::Error(erro) => {
                assert_eq!(
                    erro,
                    ErrorRecord {
                        source: "vazio.pdf".into(),
                        cnpj: None,
                        document_number: None,
                        amount: None,
                        issue_date: None,
                    }
                );
            }
            Classification::Invoice(nota) => panic!("expected error, got {nota:?}"),
        }
    }
}
