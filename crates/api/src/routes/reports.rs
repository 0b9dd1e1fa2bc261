//! Report and export routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{AppState, routes::app_error_response};
use fluxo_core::export::{ExportService, ReportRows};
use fluxo_core::reports::mapper::{map_breakdowns, map_summaries};
use fluxo_core::reports::{ReportQuery, ReportService};
use fluxo_db::repositories::report::{ReportError, ReportRepository};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/summary", get(get_summary))
        .route("/reports/summary/export", get(export_summary))
        .route("/reports/by-category", get(get_by_category))
        .route("/reports/by-category/export", get(export_by_category))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for report exports.
#[derive(Debug, Deserialize)]
pub struct ExportReportQuery {
    /// Report year (defaults to the current year).
    pub year: Option<i32>,
    /// Report month; requires `year`.
    pub month: Option<u32>,
    /// Document format ("pdf" or "xlsx").
    pub format: Option<String>,
}

impl ExportReportQuery {
    const fn report_query(&self) -> ReportQuery {
        ReportQuery {
            year: self.year,
            month: self.month,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/reports/summary`
async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let period = match query.resolve(Utc::now().date_naive()) {
        Ok(period) => period,
        Err(e) => return app_error_response(&e),
    };

    let repo = ReportRepository::new(state.db.clone());

    match repo
        .monthly_summary_rows(period.year(), period.month_filter())
        .await
    {
        Ok(rows) => {
            let summaries = ReportService::monthly_summary(&period, rows);
            (StatusCode::OK, Json(map_summaries(summaries))).into_response()
        }
        Err(e) => report_error_response(&e),
    }
}

/// GET `/reports/by-category`
async fn get_by_category(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let period = match query.resolve(Utc::now().date_naive()) {
        Ok(period) => period,
        Err(e) => return app_error_response(&e),
    };

    let repo = ReportRepository::new(state.db.clone());

    match repo
        .category_breakdown_rows(period.year(), period.month_filter())
        .await
    {
        Ok(rows) => {
            let breakdowns = ReportService::category_breakdown(rows);
            (StatusCode::OK, Json(map_breakdowns(breakdowns))).into_response()
        }
        Err(e) => report_error_response(&e),
    }
}

/// GET `/reports/summary/export`
async fn export_summary(
    State(state): State<AppState>,
    Query(query): Query<ExportReportQuery>,
) -> impl IntoResponse {
    let period = match query.report_query().resolve(Utc::now().date_naive()) {
        Ok(period) => period,
        Err(e) => return app_error_response(&e),
    };

    // Reject bad formats before touching the renderer or the database.
    if let Err(e) = ExportService::parse_format(query.format.as_deref().unwrap_or_default()) {
        return app_error_response(&e);
    }

    let Some(renderer) = &state.renderer else {
        return renderer_unavailable_response();
    };

    let repo = ReportRepository::new(state.db.clone());

    let rows = match repo
        .monthly_summary_rows(period.year(), period.month_filter())
        .await
    {
        Ok(rows) => rows,
        Err(e) => return report_error_response(&e),
    };

    let summaries = ReportService::monthly_summary(&period, rows);
    let report = ReportRows::Summary(map_summaries(summaries));

    export_response(renderer.as_ref(), &report, &period.label(), &query)
}

/// GET `/reports/by-category/export`
async fn export_by_category(
    State(state): State<AppState>,
    Query(query): Query<ExportReportQuery>,
) -> impl IntoResponse {
    let period = match query.report_query().resolve(Utc::now().date_naive()) {
        Ok(period) => period,
        Err(e) => return app_error_response(&e),
    };

    // Reject bad formats before touching the renderer or the database.
    if let Err(e) = ExportService::parse_format(query.format.as_deref().unwrap_or_default()) {
        return app_error_response(&e);
    }

    let Some(renderer) = &state.renderer else {
        return renderer_unavailable_response();
    };

    let repo = ReportRepository::new(state.db.clone());

    let rows = match repo
        .category_breakdown_rows(period.year(), period.month_filter())
        .await
    {
        Ok(rows) => rows,
        Err(e) => return report_error_response(&e),
    };

    let breakdowns = ReportService::category_breakdown(rows);
    let report = ReportRows::Breakdown(map_breakdowns(breakdowns));

    export_response(renderer.as_ref(), &report, &period.label(), &query)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Renders the report and shapes the download response.
fn export_response(
    renderer: &dyn fluxo_core::export::DocumentRenderer,
    report: &ReportRows,
    period_label: &str,
    query: &ExportReportQuery,
) -> axum::response::Response {
    let format = query.format.as_deref().unwrap_or_default();

    match ExportService::export(renderer, report, period_label, format) {
        Ok(doc) => (
            [
                (header::CONTENT_TYPE, doc.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", doc.file_name),
                ),
            ],
            doc.bytes,
        )
            .into_response(),
        Err(e) => app_error_response(&e),
    }
}

/// 503 response for exports when no renderer is configured.
fn renderer_unavailable_response() -> axum::response::Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "error": "renderer_not_configured",
            "message": "Document rendering is not configured"
        })),
    )
        .into_response()
}

/// Maps a repository error to a JSON error response.
fn report_error_response(error: &ReportError) -> axum::response::Response {
    match error {
        ReportError::InvalidPeriod { .. } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "VALIDATION_ERROR",
                "message": error.to_string()
            })),
        )
            .into_response(),
        ReportError::Database(e) => {
            error!(error = %e, "Report query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use tower::ServiceExt;

    use super::routes;
    use crate::AppState;
    use fluxo_db::entities::{categories, transactions};

    fn test_state() -> AppState {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        state_with_db(db)
    }

    fn state_with_db(db: DatabaseConnection) -> AppState {
        AppState {
            db: Arc::new(db),
            renderer: None,
        }
    }

    fn test_app() -> Router {
        app_with_state(test_state())
    }

    fn app_with_state(state: AppState) -> Router {
        Router::new().merge(routes()).with_state(state)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_summary_month_out_of_range_returns_400() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/summary?year=2025&month=13")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("month must be between 1 and 12"));
    }

    #[tokio::test]
    async fn test_summary_month_without_year_returns_400() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/summary?month=6")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("year must be provided when month is specified"));
    }

    #[tokio::test]
    async fn test_summary_accumulates_all_violations() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/by-category?year=1990&month=13")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("year must be between 2000 and"));
        assert!(body.contains("month must be between 1 and 12"));
    }

    #[tokio::test]
    async fn test_export_without_renderer_returns_503() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/summary/export?year=2024&format=pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_summary_over_empty_store_returns_twelve_zero_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(transactions::Model, categories::Model)>::new()])
            .into_connection();

        let response = app_with_state(state_with_db(db))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/summary?year=2024")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let rows: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(12));
    }

    #[tokio::test]
    async fn test_export_unknown_format_rejected_before_fetch() {
        // No query results are staged and no renderer is configured; a 400
        // proves the format check runs before either is consulted.
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/summary/export?year=2024&format=csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("invalid export format"));
    }

    #[tokio::test]
    async fn test_export_invalid_query_rejected_before_renderer_check() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/by-category/export?month=2&format=pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
