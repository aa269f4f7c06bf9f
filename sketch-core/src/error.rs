//! Error types for sketchpad operations.

use thiserror::Error;

/// Result type for sketchpad operations.
pub type SketchResult<T> = Result<T, SketchError>;

/// Errors that can occur in sketchpad operations.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Invalid sketchpad operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Sticker glyph is empty or unusable.
    #[error("Invalid sticker glyph: {0:?}")]
    InvalidGlyph(String),

    /// State serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
