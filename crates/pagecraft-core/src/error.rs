//! Editor errors.

use thiserror::Error;

/// Errors reported by editor operations.
///
/// Out-of-range geometry is clamped rather than rejected, so the only failures are
/// lookups against stale ids and document (de)serialization.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Widget not found: {0}")]
    WidgetNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
