//! Core business logic for Fluxo.
//!
//! This crate contains the pure, side-effect-free heart of the system:
//! - Report period resolution and query validation
//! - The monthly aggregation engine (gap-filling, ordering)
//! - Report mapping to response shapes
//! - Export format validation and renderer dispatch
//! - Category and transaction input validation
//!
//! No web or database dependencies: everything here is a function of its
//! inputs (plus, where noted, the current date supplied by the caller).

pub mod category;
pub mod export;
pub mod reports;
pub mod transaction;
