//! Category repository for category database operations.

use std::sync::Arc;

use chrono::Utc;
use fluxo_core::category::CategoryKind;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{categories, sea_orm_active_enums::CategoryKind as DbCategoryKind};

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category not found.
    #[error("Category not found: {0}")]
    NotFound(Uuid),

    /// An active category with the same name and kind already exists.
    #[error("a category with this name and kind already exists")]
    Duplicate,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Category name.
    pub name: String,
    /// Category kind.
    pub kind: CategoryKind,
}

/// Filters for listing categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter {
    /// Restrict to a single kind.
    pub kind: Option<CategoryKind>,
    /// Restrict to active or inactive categories.
    pub active: Option<bool>,
}

/// Category repository for category queries and mutations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepository {
    /// Creates a new category repository over a shared connection pool.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists categories matching the filter, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: CategoryFilter) -> Result<Vec<categories::Model>, CategoryError> {
        let mut query = categories::Entity::find().order_by_asc(categories::Column::Name);

        if let Some(kind) = filter.kind {
            query = query.filter(categories::Column::Kind.eq(DbCategoryKind::from(kind)));
        }

        if let Some(active) = filter.active {
            query = query.filter(categories::Column::Active.eq(active));
        }

        Ok(query.all(self.db.as_ref()).await?)
    }

    /// Finds a category by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::NotFound`] if no category has this ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<categories::Model, CategoryError> {
        categories::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::Duplicate`] if an active category with the
    /// same name and kind already exists.
    pub async fn create(&self, input: CreateCategoryInput) -> Result<categories::Model, CategoryError> {
        let kind = DbCategoryKind::from(input.kind);

        self.ensure_unique(&input.name, kind, None).await?;

        let category = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            kind: Set(kind),
            active: Set(true),
            created_at: Set(Utc::now().into()),
        };

        Ok(category.insert(self.db.as_ref()).await?)
    }

    /// Activates or deactivates a category.
    ///
    /// Categories are never deleted; deactivation hides them from reports
    /// and blocks new transactions while preserving history.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::NotFound`] if no category has this ID, or
    /// [`CategoryError::Duplicate`] if reactivating would collide with
    /// another active category of the same name and kind.
    pub async fn update_status(
        &self,
        id: Uuid,
        active: bool,
    ) -> Result<categories::Model, CategoryError> {
        let category = self.find_by_id(id).await?;

        if active && !category.active {
            self.ensure_unique(&category.name, category.kind, Some(id))
                .await?;
        }

        let mut model: categories::ActiveModel = category.into();
        model.active = Set(active);

        Ok(model.update(self.db.as_ref()).await?)
    }

    /// Checks that no other active category shares this name and kind.
    async fn ensure_unique(
        &self,
        name: &str,
        kind: DbCategoryKind,
        exclude: Option<Uuid>,
    ) -> Result<(), CategoryError> {
        let mut query = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .filter(categories::Column::Kind.eq(kind))
            .filter(categories::Column::Active.eq(true));

        if let Some(id) = exclude {
            query = query.filter(categories::Column::Id.ne(id));
        }

        if query.one(self.db.as_ref()).await?.is_some() {
            return Err(CategoryError::Duplicate);
        }

        Ok(())
    }
}
