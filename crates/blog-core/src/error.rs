//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported converter: {0} (only markdown is supported)")]
    UnsupportedConverter(String),

    #[error("Article {slug} references unknown author {login}")]
    DanglingAuthor { slug: String, login: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
///
/// A missing entity is not an error; lookups return `Option`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
