//! Category routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{AppState, routes::app_error_response};
use fluxo_core::category::{CategoryDraft, CategoryKind};
use fluxo_db::entities::categories;
use fluxo_db::repositories::category::{
    CategoryError, CategoryFilter, CategoryRepository, CreateCategoryInput,
};
use fluxo_shared::AppError;

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", get(get_category))
        .route("/categories/{id}/status", patch(update_category_status))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query parameters for listing categories.
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    /// Restrict to a single kind ("income" or "expense").
    pub kind: Option<String>,
    /// Restrict to active or inactive categories.
    pub active: Option<bool>,
}

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
    /// Category kind ("income" or "expense").
    pub kind: String,
}

/// Request body for changing a category's active status.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryStatusRequest {
    /// New active status.
    pub active: bool,
}

/// Category in responses.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    /// Category ID.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Category kind label.
    pub kind: &'static str,
    /// Whether the category is active.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<categories::Model> for CategoryResponse {
    fn from(model: categories::Model) -> Self {
        let kind: CategoryKind = model.kind.into();
        Self {
            id: model.id,
            name: model.name,
            kind: kind.label(),
            active: model.active,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/categories`
async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListCategoriesQuery>,
) -> impl IntoResponse {
    let kind = match query.kind.as_deref().map(CategoryKind::parse) {
        None => None,
        Some(Some(kind)) => Some(kind),
        Some(None) => {
            return app_error_response(&AppError::Validation(
                "invalid category kind".to_string(),
            ));
        }
    };

    let repo = CategoryRepository::new(state.db.clone());
    let filter = CategoryFilter {
        kind,
        active: query.active,
    };

    match repo.list(filter).await {
        Ok(rows) => {
            let response: Vec<CategoryResponse> =
                rows.into_iter().map(CategoryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => category_error_response(&e),
    }
}

/// GET `/categories/{id}`
async fn get_category(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = CategoryRepository::new(state.db.clone());

    match repo.find_by_id(id).await {
        Ok(category) => (StatusCode::OK, Json(CategoryResponse::from(category))).into_response(),
        Err(e) => category_error_response(&e),
    }
}

/// POST `/categories`
async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    let Some(kind) = CategoryKind::parse(&payload.kind) else {
        return app_error_response(&AppError::Validation("invalid category kind".to_string()));
    };

    let draft = CategoryDraft {
        name: payload.name,
        kind,
    };

    if let Err(e) = draft.validate() {
        return app_error_response(&e);
    }

    let repo = CategoryRepository::new(state.db.clone());
    let input = CreateCategoryInput {
        name: draft.name,
        kind: draft.kind,
    };

    match repo.create(input).await {
        Ok(category) => {
            (StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response()
        }
        Err(e) => category_error_response(&e),
    }
}

/// PATCH `/categories/{id}/status`
async fn update_category_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryStatusRequest>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new(state.db.clone());

    match repo.update_status(id, payload.active).await {
        Ok(category) => (StatusCode::OK, Json(CategoryResponse::from(category))).into_response(),
        Err(e) => category_error_response(&e),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Maps a repository error to a JSON error response.
fn category_error_response(error: &CategoryError) -> axum::response::Response {
    match error {
        CategoryError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "category_not_found",
                "message": "Category not found"
            })),
        )
            .into_response(),
        CategoryError::Duplicate => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "category_conflict",
                "message": error.to_string()
            })),
        )
            .into_response(),
        CategoryError::Database(e) => {
            error!(error = %e, "Category database operation failed");
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
