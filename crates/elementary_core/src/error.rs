//! Error types for engine operations.

use thiserror::Error;

/// Errors reported by [`crate::Automaton`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Construction with fewer than three cells.
    #[error("invalid size {size}: a row needs at least 3 cells")]
    InvalidSize { size: usize },

    /// Cell index past the end of the row.
    #[error("index {index} out of range for a row of {size} cells")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
