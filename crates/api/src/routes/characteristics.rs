//! Route definitions for pet characteristics.
//!
//! Mounted at `/pets`.
//!
//! ```text
//! GET    /{pet_id}/characteristics                    list_characteristics
//! GET    /{pet_id}/characteristics/{attribute_id}     get_characteristic
//! PUT    /{pet_id}/characteristics/{attribute_id}     upsert_characteristic
//! DELETE /{pet_id}/characteristics/{attribute_id}     delete_characteristic
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::characteristics;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{pet_id}/characteristics",
            get(characteristics::list_characteristics),
        )
        .route(
            "/{pet_id}/characteristics/{attribute_id}",
            get(characteristics::get_characteristic)
                .put(characteristics::upsert_characteristic)
                .delete(characteristics::delete_characteristic),
        )
}
