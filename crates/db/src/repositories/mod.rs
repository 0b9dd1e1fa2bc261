//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{CategoryError, CategoryFilter, CategoryRepository, CreateCategoryInput};
pub use report::{ReportError, ReportRepository};
pub use transaction::{
    CreateTransactionInput, TransactionError, TransactionFilter, TransactionRepository,
    TransactionWithCategory, UpdateTransactionInput,
};
