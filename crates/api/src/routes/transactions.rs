//! Transaction routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::{AppState, routes::app_error_response};
use fluxo_core::category::CategoryKind;
use fluxo_core::transaction::TransactionDraft;
use fluxo_db::repositories::transaction::{
    CreateTransactionInput, TransactionError, TransactionFilter, TransactionRepository,
    TransactionWithCategory, UpdateTransactionInput,
};
use fluxo_shared::AppError;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Earliest occurrence date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest occurrence date, inclusive.
    pub to: Option<NaiveDate>,
    /// Restrict to a single category.
    pub category_id: Option<Uuid>,
    /// Restrict to categories of this kind ("income" or "expense").
    pub kind: Option<String>,
}

/// Request body for creating or replacing a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    /// Transaction description.
    pub description: String,
    /// Positive amount with at most two decimal places.
    pub amount: Decimal,
    /// Date the transaction occurred.
    pub occurred_at: NaiveDate,
    /// Category the transaction belongs to.
    pub category_id: Uuid,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// Transaction in responses.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// Description.
    pub description: String,
    /// Amount.
    pub amount: Decimal,
    /// Occurrence date.
    pub occurred_at: NaiveDate,
    /// Category ID.
    pub category_id: Uuid,
    /// Category name.
    pub category_name: String,
    /// Category kind label.
    pub category_kind: &'static str,
    /// Notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<TransactionWithCategory> for TransactionResponse {
    fn from(row: TransactionWithCategory) -> Self {
        Self {
            id: row.transaction.id,
            description: row.transaction.description,
            amount: row.transaction.amount,
            occurred_at: row.transaction.occurred_at,
            category_id: row.transaction.category_id,
            category_name: row.category_name,
            category_kind: row.category_kind.label(),
            notes: row.transaction.notes,
            created_at: row.transaction.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/transactions`
async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
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

    let repo = TransactionRepository::new(state.db.clone());
    let filter = TransactionFilter {
        from: query.from,
        to: query.to,
        category_id: query.category_id,
        kind,
    };

    match repo.list(filter).await {
        Ok(rows) => {
            let response: Vec<TransactionResponse> =
                rows.into_iter().map(TransactionResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => transaction_error_response(&e),
    }
}

/// GET `/transactions/{id}`
async fn get_transaction(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.db.clone());

    match repo.find_by_id(id).await {
        Ok(row) => (StatusCode::OK, Json(TransactionResponse::from(row))).into_response(),
        Err(e) => transaction_error_response(&e),
    }
}

/// POST `/transactions`
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<TransactionRequest>,
) -> impl IntoResponse {
    if let Err(e) = validate_payload(&payload) {
        return app_error_response(&e);
    }

    let repo = TransactionRepository::new(state.db.clone());
    let input = CreateTransactionInput {
        description: payload.description,
        amount: payload.amount,
        occurred_at: payload.occurred_at,
        category_id: payload.category_id,
        notes: payload.notes,
    };

    match repo.create(input).await {
        Ok(transaction) => match repo.find_by_id(transaction.id).await {
            Ok(row) => {
                (StatusCode::CREATED, Json(TransactionResponse::from(row))).into_response()
            }
            Err(e) => transaction_error_response(&e),
        },
        Err(e) => transaction_error_response(&e),
    }
}

/// PUT `/transactions/{id}`
async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionRequest>,
) -> impl IntoResponse {
    if let Err(e) = validate_payload(&payload) {
        return app_error_response(&e);
    }

    let repo = TransactionRepository::new(state.db.clone());
    let input = UpdateTransactionInput {
        description: payload.description,
        amount: payload.amount,
        occurred_at: payload.occurred_at,
        category_id: payload.category_id,
        notes: payload.notes,
    };

    match repo.update(id, input).await {
        Ok(_) => match repo.find_by_id(id).await {
            Ok(row) => (StatusCode::OK, Json(TransactionResponse::from(row))).into_response(),
            Err(e) => transaction_error_response(&e),
        },
        Err(e) => transaction_error_response(&e),
    }
}

/// DELETE `/transactions/{id}`
async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = TransactionRepository::new(state.db.clone());

    match repo.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => transaction_error_response(&e),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs draft validation against today's date.
fn validate_payload(payload: &TransactionRequest) -> Result<(), AppError> {
    let draft = TransactionDraft {
        description: payload.description.clone(),
        amount: payload.amount,
        occurred_at: payload.occurred_at,
        notes: payload.notes.clone(),
    };
    draft.validate(Utc::now().date_naive())
}

/// Maps a repository error to a JSON error response.
fn transaction_error_response(error: &TransactionError) -> axum::response::Response {
    match error {
        TransactionError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "transaction_not_found",
                "message": "Transaction not found"
            })),
        )
            .into_response(),
        TransactionError::CategoryUnavailable => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "category_unavailable",
                "message": error.to_string()
            })),
        )
            .into_response(),
        TransactionError::Database(e) => {
            error!(error = %e, "Transaction database operation failed");
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
