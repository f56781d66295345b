//! Route definitions for the attribute catalog.
//!
//! Mounted at `/attributes`.
//!
//! ```text
//! GET    /                   list_attributes
//! POST   /                   create_attribute
//! GET    /{id}               get_attribute
//! PUT    /{id}               update_attribute
//! DELETE /{id}               soft_delete_attribute
//! DELETE /{id}/hard          hard_delete_attribute
//! POST   /{id}/restore       restore_attribute
//! GET    /{id}/options       list_options
//! POST   /{id}/options       create_option
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{attribute_options, attributes};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(attributes::list_attributes).post(attributes::create_attribute),
        )
        .route(
            "/{id}",
            get(attributes::get_attribute)
                .put(attributes::update_attribute)
                .delete(attributes::soft_delete_attribute),
        )
        .route("/{id}/hard", delete(attributes::hard_delete_attribute))
        .route("/{id}/restore", post(attributes::restore_attribute))
        .route(
            "/{id}/options",
            get(attribute_options::list_options).post(attribute_options::create_option),
        )
}
