//! Cross-cutting error types for Campus Club Connect.
//!
//! Storage and configuration errors live in their own crates. The binary
//! converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (unknown category, malformed selector).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing club.
    #[must_use]
    pub fn club_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "club".to_string(),
            id: id.to_string(),
        }
    }
}
