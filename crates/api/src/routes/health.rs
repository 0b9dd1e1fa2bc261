//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Database reachability.
    pub database: &'static str,
}

/// Health check handler.
///
/// Reports `degraded` when the database does not answer a ping; the
/// endpoint itself still returns 200 so orchestrators can read the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = state.db.ping().await.is_ok();

    Json(HealthResponse {
        status: if database_ok { "healthy" } else { "degraded" },
        service: "fluxo",
        version: env!("CARGO_PKG_VERSION"),
        database: if database_ok {
            "reachable"
        } else {
            "unreachable"
        },
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    use super::routes;
    use crate::AppState;

    #[tokio::test]
    async fn test_health_reports_service_and_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = AppState {
            db: Arc::new(db),
            renderer: None,
        };

        let response = Router::new()
            .merge(routes())
            .with_state(state)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["service"], "fluxo");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
