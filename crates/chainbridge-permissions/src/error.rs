//! Error types for permission indexing.

use thiserror::Error;

/// Grants come from a trusted collaborator, so these are programmer errors
/// rather than conditions to recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermissionError {
    #[error("permission grant at position {position} has an empty `{field}`")]
    MissingKey {
        /// Index of the offending grant in the submitted sequence.
        position: usize,
        /// Wire name of the empty key field.
        field: &'static str,
    },
}
