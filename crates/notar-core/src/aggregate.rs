//! Per-CNPJ aggregation of invoices and error records.

use crate::models::{ErrorRecord, Invoice, ReportRecord};

/// Payer key used when the CNPJ could not be extracted at all.
pub const UNKNOWN_PAYER: &str = "unknown";

/// Group invoices and error records into per-payer report records.
///
/// Invoices are appended first, then errors (errors may introduce
/// payers with zero invoices). Report records appear in first-encounter
/// order of their CNPJ. Totals are recomputed once, after all appends.
///
/// Find-or-create is a linear scan by CNPJ equality; batch sizes here
/// are tens to low hundreds of documents.
pub fn aggregate(invoices: &[Invoice], errors: &[ErrorRecord]) -> Vec<ReportRecord> {
    let mut reports: Vec<ReportRecord> = Vec::new();

    for nota in invoices {
        let report = find_or_create(&mut reports, &nota.cnpj);
        report.invoices.push(nota.clone());
    }

    for erro in errors {
        let cnpj = erro.cnpj.as_deref().unwrap_or(UNKNOWN_PAYER);
        let report = find_or_create(&mut reports, cnpj);
        report.errors.push(erro.clone());
    }

    for report in &mut reports {
        report.recompute_total();
    }

    reports
}

fn find_or_create<'a>(reports: &'a mut Vec<ReportRecord>, cnpj: &str) -> &'a mut ReportRecord {
    let idx = match reports.iter().position(|r| r.cnpj == cnpj) {
        Some(idx) => idx,
        None => {
            reports.push(ReportRecord::new(cnpj));
            reports.len() - 1
        }
    };
    &mut reports[idx]
}
