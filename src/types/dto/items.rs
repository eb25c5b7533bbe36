use chrono::{DateTime, SecondsFormat, Utc};
use poem_openapi::{
    ApiResponse, Object,
    payload::Json,
    types::{ParseError, ParseResult},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::api::items::{
    ItemApiError, ItemErrorResponse, internal_error_body, malformed_request_body,
};
use crate::errors::internal::SerializationError;
use crate::types::db::item;

/// Request model for creating or replacing an item
///
/// Fields other than `name` and `description` are ignored. Both fields must
/// be JSON strings (`description` may also be null or absent); numbers and
/// booleans are refused rather than stringified.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Name of the item
    #[oai(deserialize_with = "parse_name")]
    pub name: String,

    /// Optional description of the item
    #[oai(deserialize_with = "parse_description")]
    pub description: Option<String>,
}

fn parse_name(value: Option<Value>) -> ParseResult<String> {
    match value {
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(ParseError::expected_type(other)),
        None => Err(ParseError::expected_input()),
    }
}

fn parse_description(value: Option<Value>) -> ParseResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(description)) => Ok(Some(description)),
        Some(other) => Err(ParseError::expected_type(other)),
    }
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Unique identifier assigned by the server
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Timestamp when the item was created (RFC 3339, UTC)
    pub created_at: String,
}

impl TryFrom<item::Model> for ItemResponse {
    type Error = SerializationError;

    /// Shapes a stored row for output. Only rows that came back from the
    /// store are valid input; an unassigned id or an out-of-range timestamp
    /// means the row was never persisted properly.
    fn try_from(model: item::Model) -> Result<Self, Self::Error> {
        if model.id <= 0 {
            return Err(SerializationError::MissingField("id".to_string()));
        }

        let created_at = DateTime::<Utc>::from_timestamp_millis(model.created_at)
            .ok_or(SerializationError::InvalidTimestamp(model.created_at))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// API response for the create endpoint
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateItemApiResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<ItemResponse>),

    /// Payload failed validation
    #[oai(status = 422)]
    ValidationFailed(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateItemApiResponse {
    CreateItemApiResponse::ValidationFailed(Json(malformed_request_body(&err)))
}

impl From<ItemApiError> for CreateItemApiResponse {
    fn from(err: ItemApiError) -> Self {
        match err {
            ItemApiError::ValidationFailed(body) => Self::ValidationFailed(body),
            ItemApiError::InternalError(body) => Self::InternalError(body),
            ItemApiError::NotFound(body) => {
                tracing::error!("Unexpected not-found while creating item: {}", body.0.message);
                Self::InternalError(Json(internal_error_body()))
            }
        }
    }
}

/// API response for the list endpoint
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "list_bad_request")]
pub enum ListItemsApiResponse {
    /// Page of items in creation order
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),

    /// Invalid pagination parameters
    #[oai(status = 422)]
    ValidationFailed(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

fn list_bad_request(err: poem::Error) -> ListItemsApiResponse {
    ListItemsApiResponse::ValidationFailed(Json(malformed_request_body(&err)))
}

impl From<ItemApiError> for ListItemsApiResponse {
    fn from(err: ItemApiError) -> Self {
        match err {
            ItemApiError::ValidationFailed(body) => Self::ValidationFailed(body),
            ItemApiError::InternalError(body) => Self::InternalError(body),
            ItemApiError::NotFound(body) => {
                tracing::error!("Unexpected not-found while listing items: {}", body.0.message);
                Self::InternalError(Json(internal_error_body()))
            }
        }
    }
}

/// API response for endpoints addressing a single item by id
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "item_bad_request")]
pub enum ItemApiResponse {
    /// The addressed item
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),

    /// Payload or id failed validation
    #[oai(status = 422)]
    ValidationFailed(Json<ItemErrorResponse>),

    /// No item with this id
    #[oai(status = 404)]
    NotFound(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

fn item_bad_request(err: poem::Error) -> ItemApiResponse {
    ItemApiResponse::ValidationFailed(Json(malformed_request_body(&err)))
}

impl From<ItemApiError> for ItemApiResponse {
    fn from(err: ItemApiError) -> Self {
        match err {
            ItemApiError::ValidationFailed(body) => Self::ValidationFailed(body),
            ItemApiError::NotFound(body) => Self::NotFound(body),
            ItemApiError::InternalError(body) => Self::InternalError(body),
        }
    }
}
