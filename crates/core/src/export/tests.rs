//! Tests for export format validation and renderer dispatch.

use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use rust_decimal_macros::dec;

use super::{DocumentRenderer, ExportFormat, ExportService, RenderError, ReportRows};
use crate::reports::mapper::MonthlySummaryResponse;

/// Renderer double that records how often it was invoked.
struct RecordingRenderer {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingRenderer {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn render(
        &self,
        _report: &ReportRows,
        _period_label: &str,
        _format: ExportFormat,
    ) -> Result<Vec<u8>, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(RenderError::Failed("disk full".to_string()))
        } else {
            Ok(b"%rendered%".to_vec())
        }
    }
}

fn summary_report() -> ReportRows {
    ReportRows::Summary(vec![MonthlySummaryResponse {
        year: 2025,
        month: 4,
        total_income: dec!(1000),
        total_expense: dec!(0),
        balance: dec!(1000),
    }])
}

#[rstest]
#[case("pdf", ExportFormat::Pdf)]
#[case("PDF", ExportFormat::Pdf)]
#[case("xlsx", ExportFormat::Xlsx)]
#[case("XLSX", ExportFormat::Xlsx)]
#[case("Xlsx", ExportFormat::Xlsx)]
fn test_parse_known_formats(#[case] input: &str, #[case] expected: ExportFormat) {
    assert_eq!(ExportFormat::parse(input), Some(expected));
}

#[rstest]
#[case("csv")]
#[case("docx")]
#[case("")]
#[case("pdf ")]
fn test_parse_unknown_formats(#[case] input: &str) {
    assert_eq!(ExportFormat::parse(input), None);
}

#[test]
fn test_parse_format_maps_unknown_to_validation_error() {
    let err = ExportService::parse_format("csv").unwrap_err();

    assert_eq!(err.message(), "invalid export format");
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_export_valid_format_invokes_renderer_once() {
    let renderer = RecordingRenderer::new();
    let doc = ExportService::export(&renderer, &summary_report(), "2025-04", "pdf").unwrap();

    assert_eq!(renderer.call_count(), 1);
    assert_eq!(doc.bytes, b"%rendered%");
    assert_eq!(doc.content_type, "application/pdf");
    assert_eq!(doc.file_name, "report-summary-2025-04.pdf");
}

#[test]
fn test_export_invalid_format_never_invokes_renderer() {
    let renderer = RecordingRenderer::new();
    let err = ExportService::export(&renderer, &summary_report(), "2025", "csv").unwrap_err();

    assert_eq!(renderer.call_count(), 0);
    assert_eq!(err.message(), "invalid export format");
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_export_renderer_failure_is_generic() {
    let renderer = RecordingRenderer::failing();
    let err = ExportService::export(&renderer, &summary_report(), "2025", "xlsx").unwrap_err();

    assert_eq!(renderer.call_count(), 1);
    // Underlying cause is not leaked to the caller.
    assert!(!err.message().contains("disk full"));
    assert_eq!(err.status_code(), 500);
}

#[test]
fn test_xlsx_content_type_and_file_name() {
    let renderer = RecordingRenderer::new();
    let report = ReportRows::Breakdown(vec![]);
    let doc = ExportService::export(&renderer, &report, "2025", "XLSX").unwrap();

    assert_eq!(
        doc.content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(doc.file_name, "report-by-category-2025.xlsx");
}
