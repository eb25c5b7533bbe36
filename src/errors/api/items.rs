use crate::errors::internal::{InternalError, ValidationError};
use poem_openapi::{Object, payload::Json};

/// Standardized error response for item endpoints
#[derive(Object, Debug)]
pub struct ItemErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Item operation error types
///
/// Each endpoint's response enum absorbs the variants it can answer with.
#[derive(Debug)]
pub enum ItemApiError {
    /// Request payload or parameters failed validation (422)
    ValidationFailed(Json<ItemErrorResponse>),

    /// Item not found (404)
    NotFound(Json<ItemErrorResponse>),

    /// Internal server error (500)
    InternalError(Json<ItemErrorResponse>),
}

impl ItemApiError {
    /// Create a ValidationFailed error
    pub fn validation_failed(err: &ValidationError) -> Self {
        ItemApiError::ValidationFailed(Json(validation_failed_body(err)))
    }

    /// Create a NotFound error
    pub fn not_found(id: i32) -> Self {
        ItemApiError::NotFound(Json(ItemErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("Item not found: {}", id),
            status_code: 404,
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Store and serialization details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => Self::validation_failed(validation),
            InternalError::Item(crate::errors::internal::ItemError::NotFound(id)) => {
                Self::not_found(*id)
            }
            InternalError::Store(_) => {
                tracing::error!("Store error in item operation: {}", err);
                Self::internal_server_error()
            }
            InternalError::Serialization(_) => {
                tracing::error!("Failed to shape item response: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error without exposing internal details
    pub fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(internal_error_body()))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemApiError::ValidationFailed(json) => json.0.message.clone(),
            ItemApiError::NotFound(json) => json.0.message.clone(),
            ItemApiError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemApiError::ValidationFailed(json) => json.0.status_code,
            ItemApiError::NotFound(json) => json.0.status_code,
            ItemApiError::InternalError(json) => json.0.status_code,
        }
    }
}

/// Body used for every 422 answer, whether raised by our own checks
/// or by the payload decoder
pub fn validation_failed_body(err: &ValidationError) -> ItemErrorResponse {
    ItemErrorResponse {
        error: "validation_failed".to_string(),
        message: err.to_string(),
        status_code: 422,
    }
}

pub fn internal_error_body() -> ItemErrorResponse {
    ItemErrorResponse {
        error: "internal_error".to_string(),
        message: "An internal error occurred".to_string(),
        status_code: 500,
    }
}

/// Turns a request decoding failure (bad JSON, wrong field types, unparsable
/// path or query parameter) into our validation error body
pub fn malformed_request_body(err: &poem::Error) -> ItemErrorResponse {
    validation_failed_body(&ValidationError::Malformed(err.to_string()))
}
