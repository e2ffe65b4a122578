//! Download formats and the exported-file naming rule.

use chrono::NaiveDate;

/// Report download format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Pdf,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Pdf => "pdf",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportKind::Csv => "text/csv",
            ExportKind::Pdf => "application/pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Csv => "CSV",
            ExportKind::Pdf => "PDF",
        }
    }
}

/// File name for a downloaded report: site name with spaces as underscores
/// plus the download date, e.g. "MPA_Analysis_Dogger_Bank_2025-06-15.csv".
pub fn export_filename(mpa_name: &str, kind: ExportKind, today: NaiveDate) -> String {
    format!(
        "MPA_Analysis_{}_{}.{}",
        mpa_name.replace(' ', "_"),
        today.format("%Y-%m-%d"),
        kind.extension()
    )
}
