//! Report export.
//!
//! The engine's only export responsibility is deciding *what* gets exported:
//! it validates the requested format against a fixed closed set and hands
//! the already-shaped report to a [`DocumentRenderer`] collaborator. How the
//! bytes are produced is entirely the renderer's business.

mod error;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use error::RenderError;
pub use service::{DocumentRenderer, ExportService};
pub use types::{ExportFormat, ExportedDocument, ReportRows};
