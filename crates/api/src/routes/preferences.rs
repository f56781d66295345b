//! Route definitions for user preferences.
//!
//! Mounted at `/users`.
//!
//! ```text
//! GET    /{user_id}/preferences                    list_preferences
//! GET    /{user_id}/preferences/{attribute_id}     get_preference
//! PUT    /{user_id}/preferences/{attribute_id}     upsert_preference
//! DELETE /{user_id}/preferences/{attribute_id}     delete_preference
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/preferences", get(preferences::list_preferences))
        .route(
            "/{user_id}/preferences/{attribute_id}",
            get(preferences::get_preference)
                .put(preferences::upsert_preference)
                .delete(preferences::delete_preference),
        )
}
