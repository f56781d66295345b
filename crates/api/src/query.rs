//! Shared query parameter types for API handlers.

use pawmatch_core::error::CoreError;
use pawmatch_core::pagination::PageRequest;
use serde::Deserialize;

/// Query parameters for `GET /attributes`.
///
/// Missing `page`/`page_size` fall back to the defaults in
/// [`pawmatch_core::pagination`]; out-of-range values are rejected rather
/// than clamped.
#[derive(Debug, Default, Deserialize)]
pub struct ListAttributesParams {
    /// Case-insensitive substring matched against name, unit and type.
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Also list soft-deleted attributes.
    #[serde(default)]
    pub include_deleted: bool,
}

impl ListAttributesParams {
    pub fn page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page, self.page_size)
    }
}
