//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during rendering and export.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Drawing surface could not be obtained.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Export encoding failed.
    #[error("Export failed: {0}")]
    Export(String),
}
