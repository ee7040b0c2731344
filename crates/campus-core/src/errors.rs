//! Cross-cutting error types for CampusRoot.
//!
//! Crate-specific errors (`ConfigError`, `AuthError`, `ViewError`) live in
//! their respective crates and wrap `CoreError` where they need to.

use thiserror::Error;

/// Errors that can be raised by any CampusRoot crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (duplicate ids, malformed values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A fixture document could not be parsed.
    #[error("Fixture '{name}' is malformed: {source}")]
    Fixture {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A fixture file could not be read.
    #[error("Failed to read fixture '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
