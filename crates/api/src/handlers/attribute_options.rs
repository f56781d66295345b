//! Handlers for the categorical options of `string` attributes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use pawmatch_core::attribute::{self, AttributeType, UQ_ACTIVE_OPTION_NAME};
use pawmatch_core::error::CoreError;
use pawmatch_core::types::{is_unassigned_id, DbId};
use pawmatch_db::is_unique_violation;
use pawmatch_db::models::attribute_option::{
    AttributeOption, CreateAttributeOption, UpdateAttributeOption,
};
use pawmatch_db::repositories::AttributeOptionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::attributes::ensure_attribute_exists;
use crate::response::DataResponse;
use crate::state::AppState;

const OPTION: &str = "Option";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an active option exists, returning the full row.
async fn ensure_option_exists(pool: &PgPool, id: DbId) -> AppResult<AttributeOption> {
    if is_unassigned_id(id) {
        return Err(AppError::not_found(OPTION, id));
    }
    AttributeOptionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(OPTION, id))
}

/// Verify that `option_id` is an active option of `attribute_id`.
///
/// Used by the preference and characteristic handlers before an upsert.
pub(crate) async fn ensure_option_of_attribute(
    pool: &PgPool,
    attribute_id: DbId,
    option_id: DbId,
) -> AppResult<()> {
    let belongs = !is_unassigned_id(option_id)
        && AttributeOptionRepo::find_by_id(pool, option_id)
            .await?
            .is_some_and(|option| option.attribute_id == attribute_id);
    if !belongs {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Option {option_id} is not an active option of attribute {attribute_id}"
        ))));
    }
    Ok(())
}

fn option_name_conflict(err: sqlx::Error, name: &str) -> AppError {
    if is_unique_violation(&err, UQ_ACTIVE_OPTION_NAME) {
        AppError::Core(attribute::duplicate_option_name(name))
    } else {
        AppError::Database(err)
    }
}

// ---------------------------------------------------------------------------
// GET /attributes/{id}/options
// ---------------------------------------------------------------------------

/// List the active options of an active attribute.
pub async fn list_options(
    State(state): State<AppState>,
    Path(attribute_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_attribute_exists(&state.pool, attribute_id).await?;
    let items = AttributeOptionRepo::list_for_attribute(&state.pool, attribute_id).await?;
    tracing::debug!(attribute_id, count = items.len(), "Listed attribute options");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /attributes/{id}/options
// ---------------------------------------------------------------------------

/// Add an option to a categorical attribute.
pub async fn create_option(
    State(state): State<AppState>,
    Path(attribute_id): Path<DbId>,
    Json(input): Json<CreateAttributeOption>,
) -> AppResult<impl IntoResponse> {
    let name = attribute::normalize_name(OPTION, &input.name)?;

    let parent = ensure_attribute_exists(&state.pool, attribute_id).await?;
    if !AttributeType::parse(&parent.type_value)?.is_categorical() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Attribute {attribute_id} is numeric and cannot have options"
        ))));
    }
    if AttributeOptionRepo::name_exists(&state.pool, attribute_id, &name, None).await? {
        return Err(attribute::duplicate_option_name(&name).into());
    }

    let created = AttributeOptionRepo::create(&state.pool, attribute_id, &name)
        .await
        .map_err(|err| option_name_conflict(err, &name))?;

    tracing::info!(id = created.id, attribute_id, name = %created.name, "Attribute option created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /attribute-options/{id}
// ---------------------------------------------------------------------------

/// Rename an option. A blank name leaves it unchanged.
pub async fn update_option(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttributeOption>,
) -> AppResult<impl IntoResponse> {
    let name = attribute::normalize_name_patch(OPTION, input.name.as_deref())?;
    let existing = ensure_option_exists(&state.pool, id).await?;

    let Some(name) = name else {
        return Ok(Json(DataResponse { data: existing }));
    };
    if AttributeOptionRepo::name_exists(&state.pool, existing.attribute_id, &name, Some(id)).await? {
        return Err(attribute::duplicate_option_name(&name).into());
    }

    let updated = AttributeOptionRepo::rename(&state.pool, id, &name)
        .await
        .map_err(|err| option_name_conflict(err, &name))?
        .ok_or_else(|| AppError::not_found(OPTION, id))?;

    tracing::info!(id, name = %updated.name, "Attribute option renamed");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /attribute-options/{id}
// ---------------------------------------------------------------------------

/// Soft-delete an option. Deleting it twice is a Conflict.
pub async fn delete_option(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if is_unassigned_id(id) {
        return Err(AppError::not_found(OPTION, id));
    }
    let existing = AttributeOptionRepo::find_by_id_include_deleted(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(OPTION, id))?;
    if existing.is_deleted || !AttributeOptionRepo::soft_delete(&state.pool, id).await? {
        return Err(attribute::already_soft_deleted(OPTION, id).into());
    }

    tracing::info!(id, attribute_id = existing.attribute_id, "Attribute option soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}
