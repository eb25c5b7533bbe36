// Wire types - request/response objects exposed through the OpenAPI schema
pub mod common;
pub mod items;
