use thiserror::Error;

pub mod item;
pub mod serialization;
pub mod store;
pub mod validation;

pub use item::ItemError;
pub use serialization::SerializationError;
pub use store::StoreError;
pub use validation::ValidationError;

/// Internal error type for store, provider and coordinator operations
///
/// Separates infrastructure failures (store, serialization) from
/// client-caused outcomes (validation, not-found).
/// Not exposed via API - endpoints must convert to ItemApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    pub fn store(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Store(StoreError::Operation { operation: operation.to_string(), source })
    }

    pub fn not_found(id: i32) -> InternalError {
        InternalError::Item(ItemError::NotFound(id))
    }
}
