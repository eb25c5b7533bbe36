use thiserror::Error;

/// Raised when a stored record cannot be shaped into a response.
/// Never caused by client input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Record is missing required field '{0}'")]
    MissingField(String),

    #[error("Record has an unrepresentable created_at value: {0}")]
    InvalidTimestamp(i64),
}
