//! # List Errors
//!
//! The list operations themselves are total: `tail`, `drop` and `init` on an
//! empty list simply return an empty list. `ListError` exists for the checked
//! variants that report those cases instead of absorbing them.

use thiserror::Error;

/// Reasons a checked list operation refused its input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs at least one element.
    #[error("cannot take the {operation} of an empty list")]
    EmptyList {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// More elements were requested than the list holds.
    #[error("cannot drop {requested} elements from a list of length {length}")]
    DropPastEnd {
        /// Number of elements the caller asked to remove.
        requested: usize,
        /// Number of elements actually in the list.
        length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let empty = ListError::EmptyList { operation: "tail" };
        assert_eq!(empty.to_string(), "cannot take the tail of an empty list");

        let past_end = ListError::DropPastEnd {
            requested: 5,
            length: 3,
        };
        assert_eq!(
            past_end.to_string(),
            "cannot drop 5 elements from a list of length 3"
        );
    }
}
