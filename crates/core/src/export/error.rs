//! Export error types.

use thiserror::Error;

/// Errors reported by a document renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer failed to produce a document.
    #[error("renderer failed: {0}")]
    Failed(String),
}
