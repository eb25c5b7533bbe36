use crate::errors::internal::ValidationError;
use crate::types::dto::items::ItemRequest;
use crate::types::internal::{ItemInput, PageWindow, DEFAULT_PAGE_LIMIT};

/// Validation provider for item payloads and pagination windows
///
/// Stateless apart from its policy, so one instance is shared by every request.
/// Type checking of the payload (missing `name`, non-string fields) already
/// happened while decoding the request; this applies the remaining rules:
/// - Empty-name policy (name blank after trimming), configurable
/// - Pagination defaults (`skip` = 0, `limit` = 10) and bounds
#[derive(Debug, Clone)]
pub struct ItemValidatorProvider {
    reject_empty_name: bool,
}

impl ItemValidatorProvider {
    /// Create a validator
    ///
    /// # Arguments
    /// * `reject_empty_name` - When true, names that are empty after trimming are refused
    pub fn new(reject_empty_name: bool) -> Self {
        Self { reject_empty_name }
    }

    pub fn rejects_empty_name(&self) -> bool {
        self.reject_empty_name
    }

    /// Validate an inbound create/replace payload
    ///
    /// The name is checked in trimmed form but kept exactly as sent.
    ///
    /// # Returns
    /// * `Ok(ItemInput)` - The client-settable fields
    /// * `Err(ValidationError::EmptyName)` - Blank name while the policy is enabled
    pub fn validate_input(&self, request: ItemRequest) -> Result<ItemInput, ValidationError> {
        if self.reject_empty_name && request.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(ItemInput {
            name: request.name,
            description: request.description,
        })
    }

    /// Normalize raw `skip`/`limit` query parameters
    ///
    /// # Returns
    /// * `Ok(PageWindow)` - With defaults applied for omitted values
    /// * `Err(ValidationError)` - Negative skip or non-positive limit
    pub fn page_window(
        &self,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PageWindow, ValidationError> {
        let skip = match skip {
            None => 0,
            Some(value) if value < 0 => return Err(ValidationError::InvalidSkip(value)),
            Some(value) => value as u64,
        };

        let limit = match limit {
            None => DEFAULT_PAGE_LIMIT,
            Some(value) if value <= 0 => return Err(ValidationError::InvalidLimit(value)),
            Some(value) => value as u64,
        };

        Ok(PageWindow { skip, limit })
    }
}
