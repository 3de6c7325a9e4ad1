//! Error types for the checkup status engine.
//!
//! The classification core is total and never fails. Errors only arise at
//! the edges: reading range tables, loading catalog documents, resolving ids
//! requested by a caller, and parsing dates supplied on the command line.

use thiserror::Error;

/// The unified error type for the checkup crates.
#[derive(Debug, Error)]
pub enum CheckupError {
    /// A reference-range configuration is missing, unreadable or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A catalog document could not be read or mapped onto the data model.
    #[error("invalid catalog: {reason}")]
    CatalogInvalid { reason: String },

    /// A catalog document violates the catalog JSON Schema.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// A record the caller asked for by id does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: String, id: String },

    /// A calendar date argument could not be parsed.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
}

/// Convenience alias used throughout the checkup crates.
pub type CheckupResult<T> = Result<T, CheckupError>;
