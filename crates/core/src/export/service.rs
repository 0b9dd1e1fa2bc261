//! Export dispatch service.

use fluxo_shared::{AppError, AppResult};

use super::error::RenderError;
use super::types::{ExportFormat, ExportedDocument, ReportRows};

/// Renders a shaped report into a binary document.
///
/// Implementations live outside the core: the engine neither knows nor
/// cares how the bytes are produced. Implementations are responsible for
/// logging their own failure causes.
pub trait DocumentRenderer: Send + Sync {
    /// Renders `report` for `period_label` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the document cannot be produced.
    fn render(
        &self,
        report: &ReportRows,
        period_label: &str,
        format: ExportFormat,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Service for exporting shaped reports through a renderer.
pub struct ExportService;

impl ExportService {
    /// Parses a requested format string.
    ///
    /// Callers that can fail cheaply (for example before fetching report
    /// data) should parse up front with this and pass the raw string on to
    /// [`ExportService::export`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for anything outside the supported
    /// set.
    pub fn parse_format(format: &str) -> AppResult<ExportFormat> {
        ExportFormat::parse(format)
            .ok_or_else(|| AppError::Validation("invalid export format".to_string()))
    }

    /// Validates the requested format and renders the report.
    ///
    /// An unknown format fails before the renderer is invoked. Renderer
    /// failures surface as a generic internal error; the cause is not
    /// leaked to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid format and
    /// [`AppError::Internal`] when rendering fails.
    pub fn export(
        renderer: &dyn DocumentRenderer,
        report: &ReportRows,
        period_label: &str,
        format: &str,
    ) -> AppResult<ExportedDocument> {
        let format = Self::parse_format(format)?;

        let bytes = renderer
            .render(report, period_label, format)
            .map_err(|_| AppError::Internal("failed to render export document".to_string()))?;

        Ok(ExportedDocument {
            bytes,
            content_type: format.content_type(),
            file_name: format!(
                "report-{}-{}.{}",
                report.kind_name(),
                period_label,
                format.extension()
            ),
        })
    }
}
