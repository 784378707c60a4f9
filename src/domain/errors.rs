//! Domain layer error types
//!
//! All errors that can occur in model and widget operations.

use thiserror::Error;

/// Main model error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Index argument outside the valid bounds of the operation
    #[error("Index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Item-based operation given an element absent from the collection
    #[error("Element not found in collection")]
    ElementNotFound,

    /// Selection mode string other than "single" or "multiple"
    #[error("Invalid selection mode: {0}")]
    InvalidSelectionMode(String),
}

impl ModelError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        ModelError::IndexOutOfRange { index, len }
    }
}

/// Result alias used throughout the crate
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ModelError::out_of_range(4, 2).to_string(),
            "Index out of range: 4 (length 2)"
        );
        assert_eq!(
            ModelError::ElementNotFound.to_string(),
            "Element not found in collection"
        );
        assert_eq!(
            ModelError::InvalidSelectionMode("both".into()).to_string(),
            "Invalid selection mode: both"
        );
    }
}
