//! Route definitions for individual attribute options.
//!
//! Mounted at `/attribute-options`. Listing and creation live under
//! `/attributes/{id}/options`.
//!
//! ```text
//! PUT    /{id}               update_option
//! DELETE /{id}               delete_option
//! ```

use axum::routing::put;
use axum::Router;

use crate::handlers::attribute_options;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(attribute_options::update_option).delete(attribute_options::delete_option),
    )
}
