//! Error types for the directory data model.

use thiserror::Error;

/// Errors raised while constructing model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Member identifiers must contain at least one non-whitespace character.
    #[error("invalid member id: {0:?}")]
    InvalidMemberId(String),

    /// Members must have a name to be listed.
    #[error("member name is empty")]
    EmptyName,
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
