/// Default number of items returned by a list call when `limit` is omitted
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Client-settable item fields after validation
///
/// Only `name` and `description` exist here; identity and timestamps are
/// assigned by the store and can never be carried in from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub description: Option<String>,
}

/// Offset/limit window for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
