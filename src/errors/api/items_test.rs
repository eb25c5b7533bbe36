#[cfg(test)]
mod tests {
    use crate::errors::ItemApiError;
    use crate::errors::internal::{InternalError, SerializationError, StoreError, ValidationError};
    use sea_orm::DbErr;

    #[test]
    fn test_store_error_converts_to_internal_server_error() {
        let internal_err = InternalError::store("list_items", DbErr::Custom("boom".to_string()));
        let api_err = ItemApiError::from_internal_error(internal_err);

        assert_eq!(api_err.message(), "An internal error occurred");
        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_transaction_begin_error_converts_to_internal_server_error() {
        let internal_err: InternalError = StoreError::TransactionBegin {
            source: DbErr::Custom("pool closed".to_string()),
        }
        .into();
        let api_err = ItemApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.message().contains("pool closed"));
    }

    #[test]
    fn test_serialization_error_converts_to_internal_server_error() {
        let internal_err: InternalError = SerializationError::MissingField("id".to_string()).into();
        let api_err = ItemApiError::from_internal_error(internal_err);

        assert_eq!(api_err.message(), "An internal error occurred");
        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_not_found_converts_correctly() {
        let api_err = ItemApiError::from_internal_error(InternalError::not_found(7));

        assert!(matches!(api_err, ItemApiError::NotFound(_)));
        assert_eq!(api_err.message(), "Item not found: 7");
        assert_eq!(api_err.status_code(), 404);
    }

    #[test]
    fn test_validation_error_converts_correctly() {
        let api_err = ItemApiError::from_internal_error(ValidationError::EmptyName.into());

        assert!(matches!(api_err, ItemApiError::ValidationFailed(_)));
        assert_eq!(api_err.message(), "Field 'name' must not be empty");
        assert_eq!(api_err.status_code(), 422);
    }

    #[test]
    fn test_not_found_and_validation_are_distinct_client_errors() {
        let not_found = ItemApiError::from_internal_error(InternalError::not_found(1));
        let invalid = ItemApiError::from_internal_error(ValidationError::InvalidSkip(-3).into());

        assert_ne!(not_found.status_code(), invalid.status_code());
        assert!(not_found.status_code() < 500);
        assert!(invalid.status_code() < 500);
    }
}
