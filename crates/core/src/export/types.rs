//! Export data types.

use crate::reports::mapper::{CategoryBreakdownResponse, MonthlySummaryResponse};

/// Supported export document formats. A closed set: anything else is
/// rejected before the renderer is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Portable Document Format.
    Pdf,
    /// Office Open XML spreadsheet.
    Xlsx,
}

impl ExportFormat {
    /// Parses a format from its file-extension name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// The MIME content type for this format.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// The file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
        }
    }
}

/// A shaped report ready for rendering, distinguishing the two report kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRows {
    /// Monthly summary rows.
    Summary(Vec<MonthlySummaryResponse>),
    /// Category breakdown rows.
    Breakdown(Vec<CategoryBreakdownResponse>),
}

impl ReportRows {
    /// A short name for the report kind, used in export file names.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Summary(_) => "summary",
            Self::Breakdown(_) => "by-category",
        }
    }
}

/// A rendered export document.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// Raw document bytes.
    pub bytes: Vec<u8>,
    /// MIME content type.
    pub content_type: &'static str,
    /// Suggested file name, e.g. "report-summary-2025-04.pdf".
    pub file_name: String,
}
