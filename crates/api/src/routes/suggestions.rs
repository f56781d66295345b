use axum::routing::get;
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// `GET /filter-suggestion`, merged at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new().route("/filter-suggestion", get(suggestions::get_filter_suggestion))
}
