//! Error types for wicker operations.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::types::Type;

/// Convenience alias for results of wicker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for wicker operations.
///
/// Operations are deliberately lenient about the edge cases the library
/// defines (empty input, absent match, out-of-range exclusion index), so
/// errors only arise from wrongly-shaped values or genuinely invalid
/// positions.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation received a value of the wrong shape.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// An index-addressed operation received a position past the end.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },
}

impl Error {
    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }
}
