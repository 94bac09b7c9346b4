//! Error types for the OpsDeck workspace core.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the OpsDeck crates.
///
/// Store operations are total over their input domains and absorb
/// invalid references as no-ops, so errors here are reserved for
/// construction-time invariant violations and collaborator failures.
#[derive(Error, Debug, Clone, Serialize)]
pub enum OpsDeckError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A document tree was constructed with a duplicate node id
    #[error("Duplicate document node id: '{id}'")]
    DuplicateNodeId { id: String },

    /// Assistant responder failure
    #[error("Responder error: {0}")]
    Responder(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OpsDeckError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a DuplicateNodeId error
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        Self::DuplicateNodeId { id: id.into() }
    }

    /// Creates a Responder error
    pub fn responder(message: impl Into<String>) -> Self {
        Self::Responder(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A type alias for `Result<T, OpsDeckError>`.
pub type Result<T> = std::result::Result<T, OpsDeckError>;
