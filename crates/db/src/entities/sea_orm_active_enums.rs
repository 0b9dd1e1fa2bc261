//! Database-backed enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `category_kind` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category_kind")]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Money coming in.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<CategoryKind> for fluxo_core::category::CategoryKind {
    fn from(kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Income => Self::Income,
            CategoryKind::Expense => Self::Expense,
        }
    }
}

impl From<fluxo_core::category::CategoryKind> for CategoryKind {
    fn from(kind: fluxo_core::category::CategoryKind) -> Self {
        match kind {
            fluxo_core::category::CategoryKind::Income => Self::Income,
            fluxo_core::category::CategoryKind::Expense => Self::Expense,
        }
    }
}
