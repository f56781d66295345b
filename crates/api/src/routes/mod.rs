pub mod attribute_options;
pub mod attributes;
pub mod characteristics;
pub mod health;
pub mod preferences;
pub mod suggestions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /attributes                                      list, create
/// /attributes/{id}                                 get, update, soft delete
/// /attributes/{id}/hard                            hard delete (DELETE)
/// /attributes/{id}/restore                         restore (POST)
/// /attributes/{id}/options                         list, create
///
/// /attribute-options/{id}                          rename (PUT), soft delete
///
/// /users/{user_id}/preferences                     list
/// /users/{user_id}/preferences/{attribute_id}      get, upsert (PUT), clear
///
/// /pets/{pet_id}/characteristics                   list
/// /pets/{pet_id}/characteristics/{attribute_id}    get, upsert (PUT), clear
///
/// /filter-suggestion                               catalog + top weighted attributes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Attribute catalog and its options.
        .nest("/attributes", attributes::router())
        .nest("/attribute-options", attribute_options::router())
        // Per-owner stores.
        .nest("/users", preferences::router())
        .nest("/pets", characteristics::router())
        // Suggestion engine (read-only).
        .merge(suggestions::router())
}
