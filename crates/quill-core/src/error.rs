//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Absence of a row is not an error at this layer - lookups return
/// `Option`/`bool` and the HTTP layer decides what a miss means.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
