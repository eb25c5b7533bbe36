use thiserror::Error;

/// Client-side input problems, detected before any store access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field 'name' must not be empty")]
    EmptyName,

    #[error("Query parameter 'skip' must be a non-negative integer, got {0}")]
    InvalidSkip(i64),

    #[error("Query parameter 'limit' must be a positive integer, got {0}")]
    InvalidLimit(i64),

    /// Request body or parameters did not match the schema
    /// (missing `name`, non-string `name`/`description`, non-integer id...)
    #[error("Malformed request: {0}")]
    Malformed(String),
}
