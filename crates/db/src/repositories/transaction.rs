//! Transaction repository for transaction database operations.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use fluxo_core::category::CategoryKind;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{
    categories, sea_orm_active_enums::CategoryKind as DbCategoryKind, transactions,
};

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),

    /// Referenced category is missing or inactive.
    #[error("the specified category does not exist or is not active")]
    CategoryUnavailable,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Transaction description.
    pub description: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Date the transaction occurred.
    pub occurred_at: NaiveDate,
    /// Category the transaction belongs to.
    pub category_id: Uuid,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// Input for replacing a transaction's data. The creation timestamp is
/// preserved.
#[derive(Debug, Clone)]
pub struct UpdateTransactionInput {
    /// New description.
    pub description: String,
    /// New amount.
    pub amount: Decimal,
    /// New occurrence date.
    pub occurred_at: NaiveDate,
    /// New category.
    pub category_id: Uuid,
    /// New notes.
    pub notes: Option<String>,
}

/// Filters for listing transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    /// Earliest occurrence date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest occurrence date, inclusive.
    pub to: Option<NaiveDate>,
    /// Restrict to a single category.
    pub category_id: Option<Uuid>,
    /// Restrict to categories of this kind.
    pub kind: Option<CategoryKind>,
}

/// A transaction joined with its category.
#[derive(Debug, Clone)]
pub struct TransactionWithCategory {
    /// Transaction record.
    pub transaction: transactions::Model,
    /// Category name.
    pub category_name: String,
    /// Category kind.
    pub category_kind: CategoryKind,
}

/// Transaction repository for transaction queries and mutations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: Arc<DatabaseConnection>,
}

impl TransactionRepository {
    /// Creates a new transaction repository over a shared connection pool.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists transactions matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<TransactionWithCategory>, TransactionError> {
        let mut query = transactions::Entity::find()
            .find_also_related(categories::Entity)
            .order_by_desc(transactions::Column::OccurredAt)
            .order_by_desc(transactions::Column::CreatedAt);

        if let Some(from) = filter.from {
            query = query.filter(transactions::Column::OccurredAt.gte(from));
        }

        if let Some(to) = filter.to {
            query = query.filter(transactions::Column::OccurredAt.lte(to));
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(transactions::Column::CategoryId.eq(category_id));
        }

        if let Some(kind) = filter.kind {
            query = query.filter(categories::Column::Kind.eq(DbCategoryKind::from(kind)));
        }

        let rows = query.all(self.db.as_ref()).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(transaction, category)| {
                category.map(|c| TransactionWithCategory {
                    transaction,
                    category_name: c.name,
                    category_kind: c.kind.into(),
                })
            })
            .collect())
    }

    /// Finds a transaction by ID, joined with its category.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotFound`] if no transaction has this ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<TransactionWithCategory, TransactionError> {
        let (transaction, category) = transactions::Entity::find_by_id(id)
            .find_also_related(categories::Entity)
            .one(self.db.as_ref())
            .await?
            .ok_or(TransactionError::NotFound(id))?;

        // The FK guarantees a category row.
        let category = category.ok_or(TransactionError::NotFound(id))?;

        Ok(TransactionWithCategory {
            transaction,
            category_name: category.name,
            category_kind: category.kind.into(),
        })
    }

    /// Creates a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::CategoryUnavailable`] if the category
    /// does not exist or is inactive.
    pub async fn create(
        &self,
        input: CreateTransactionInput,
    ) -> Result<transactions::Model, TransactionError> {
        self.ensure_category_active(input.category_id).await?;

        let transaction = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            description: Set(input.description),
            amount: Set(input.amount),
            occurred_at: Set(input.occurred_at),
            category_id: Set(input.category_id),
            notes: Set(input.notes),
            created_at: Set(Utc::now().into()),
        };

        Ok(transaction.insert(self.db.as_ref()).await?)
    }

    /// Replaces a transaction's data, keeping its creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotFound`] if no transaction has this ID,
    /// or [`TransactionError::CategoryUnavailable`] if the new category does
    /// not exist or is inactive.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateTransactionInput,
    ) -> Result<transactions::Model, TransactionError> {
        let existing = transactions::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(TransactionError::NotFound(id))?;

        self.ensure_category_active(input.category_id).await?;

        let mut model: transactions::ActiveModel = existing.into();
        model.description = Set(input.description);
        model.amount = Set(input.amount);
        model.occurred_at = Set(input.occurred_at);
        model.category_id = Set(input.category_id);
        model.notes = Set(input.notes);

        Ok(model.update(self.db.as_ref()).await?)
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotFound`] if no transaction has this ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), TransactionError> {
        let existing = transactions::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(TransactionError::NotFound(id))?;

        existing.delete(self.db.as_ref()).await?;

        Ok(())
    }

    /// Checks that the category exists and is active.
    async fn ensure_category_active(&self, category_id: Uuid) -> Result<(), TransactionError> {
        let category = categories::Entity::find_by_id(category_id)
            .one(self.db.as_ref())
            .await?;

        match category {
            Some(c) if c.active => Ok(()),
            _ => Err(TransactionError::CategoryUnavailable),
        }
    }
}
