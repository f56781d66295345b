//! Handlers for per-user matching preferences.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pawmatch_core::attribute::AttributeType;
use pawmatch_core::preference::validate_preference_shape;
use pawmatch_core::types::DbId;
use pawmatch_db::models::user_preference::UpsertUserPreference;
use pawmatch_db::repositories::UserPreferenceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::attribute_options::ensure_option_of_attribute;
use crate::handlers::attributes::ensure_attribute_exists;
use crate::response::DataResponse;
use crate::state::AppState;

const PREFERENCE: &str = "Preference for attribute";

// ---------------------------------------------------------------------------
// GET /users/{user_id}/preferences
// ---------------------------------------------------------------------------

/// List a user's preferences, ordered by attribute id.
pub async fn list_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let items = UserPreferenceRepo::list_by_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = items.len(), "Listed user preferences");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /users/{user_id}/preferences/{attribute_id}
// ---------------------------------------------------------------------------

pub async fn get_preference(
    State(state): State<AppState>,
    Path((user_id, attribute_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let preference = UserPreferenceRepo::find(&state.pool, user_id, attribute_id)
        .await?
        .ok_or_else(|| AppError::not_found(PREFERENCE, attribute_id))?;
    Ok(Json(DataResponse { data: preference }))
}

// ---------------------------------------------------------------------------
// PUT /users/{user_id}/preferences/{attribute_id}
// ---------------------------------------------------------------------------

/// Create or replace a user's preference for one attribute.
///
/// The payload must match the attribute's type: an active option of that
/// attribute for `string`, a range for `float`.
pub async fn upsert_preference(
    State(state): State<AppState>,
    Path((user_id, attribute_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpsertUserPreference>,
) -> AppResult<impl IntoResponse> {
    let attribute = ensure_attribute_exists(&state.pool, attribute_id).await?;
    let attribute_type = AttributeType::parse(&attribute.type_value)?;
    validate_preference_shape(
        attribute_type,
        input.option_id,
        input.min_value,
        input.max_value,
    )?;
    if let Some(option_id) = input.option_id {
        ensure_option_of_attribute(&state.pool, attribute_id, option_id).await?;
    }

    let saved = UserPreferenceRepo::upsert(&state.pool, user_id, attribute_id, &input).await?;
    tracing::info!(id = saved.id, user_id, attribute_id, "User preference saved");
    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// DELETE /users/{user_id}/preferences/{attribute_id}
// ---------------------------------------------------------------------------

/// Clear a user's preference for one attribute.
pub async fn delete_preference(
    State(state): State<AppState>,
    Path((user_id, attribute_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if UserPreferenceRepo::delete(&state.pool, user_id, attribute_id).await? {
        tracing::info!(user_id, attribute_id, "User preference cleared");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(PREFERENCE, attribute_id))
    }
}
