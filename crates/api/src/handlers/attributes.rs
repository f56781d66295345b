//! Handlers for the attribute catalog.
//!
//! Every write validates and normalises its input before touching the
//! database. Name uniqueness is pre-checked for a friendly error and then
//! enforced by the `uq_attributes_active_name` index; both paths yield the
//! same Conflict.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use pawmatch_core::attribute::{self, AttributeType, UQ_ACTIVE_ATTRIBUTE_NAME};
use pawmatch_core::error::CoreError;
use pawmatch_core::types::{is_unassigned_id, DbId};
use pawmatch_db::is_unique_violation;
use pawmatch_db::models::attribute::{Attribute, CreateAttribute, UpdateAttribute};
use pawmatch_db::repositories::AttributeRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListAttributesParams;
use crate::response::DataResponse;
use crate::state::AppState;

const ATTRIBUTE: &str = "Attribute";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an active attribute exists, returning the full row.
///
/// Unassigned ids (`<= 0`) resolve to NotFound without a query.
pub(crate) async fn ensure_attribute_exists(pool: &PgPool, id: DbId) -> AppResult<Attribute> {
    if is_unassigned_id(id) {
        return Err(AppError::not_found(ATTRIBUTE, id));
    }
    AttributeRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ATTRIBUTE, id))
}

/// Fetch an attribute whatever its soft-delete state.
async fn find_any_attribute(pool: &PgPool, id: DbId) -> AppResult<Attribute> {
    if is_unassigned_id(id) {
        return Err(AppError::not_found(ATTRIBUTE, id));
    }
    AttributeRepo::find_by_id_include_deleted(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ATTRIBUTE, id))
}

/// Fail with Conflict if another active attribute already uses `name`.
async fn ensure_name_available(pool: &PgPool, name: &str, exclude_id: Option<DbId>) -> AppResult<()> {
    if AttributeRepo::name_exists(pool, name, exclude_id).await? {
        return Err(attribute::duplicate_attribute_name(name).into());
    }
    Ok(())
}

/// Translate a lost race on the name index into the pre-check's Conflict.
fn name_conflict(err: sqlx::Error, name: &str) -> AppError {
    if is_unique_violation(&err, UQ_ACTIVE_ATTRIBUTE_NAME) {
        AppError::Core(attribute::duplicate_attribute_name(name))
    } else {
        AppError::Database(err)
    }
}

// ---------------------------------------------------------------------------
// GET /attributes
// ---------------------------------------------------------------------------

/// Search and page through the catalog.
pub async fn list_attributes(
    State(state): State<AppState>,
    Query(params): Query<ListAttributesParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.page_request()?;
    let page = AttributeRepo::list(
        &state.pool,
        request,
        params.search.as_deref(),
        params.include_deleted,
    )
    .await?;
    tracing::debug!(
        count = page.items.len(),
        total = page.total,
        page = page.page,
        "Listed attributes"
    );
    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// POST /attributes
// ---------------------------------------------------------------------------

/// Create a new attribute.
pub async fn create_attribute(
    State(state): State<AppState>,
    Json(input): Json<CreateAttribute>,
) -> AppResult<impl IntoResponse> {
    let name = attribute::normalize_name(ATTRIBUTE, &input.name)?;
    let attribute_type = AttributeType::parse(&input.type_value)?;
    let unit = attribute::normalize_unit(input.unit.as_deref())?;
    if let Some(percent) = input.percent {
        attribute::validate_percent(percent)?;
    }

    ensure_name_available(&state.pool, &name, None).await?;

    let normalized = CreateAttribute {
        name,
        type_value: attribute_type.as_str().to_string(),
        unit,
        percent: input.percent,
    };
    let created = AttributeRepo::create(&state.pool, &normalized)
        .await
        .map_err(|err| name_conflict(err, &normalized.name))?;

    tracing::info!(id = created.id, name = %created.name, "Attribute created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /attributes/{id}
// ---------------------------------------------------------------------------

/// Get one active attribute with its active options.
pub async fn get_attribute(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if is_unassigned_id(id) {
        return Err(AppError::not_found(ATTRIBUTE, id));
    }
    let attribute = AttributeRepo::find_with_options(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ATTRIBUTE, id))?;
    Ok(Json(DataResponse { data: attribute }))
}

// ---------------------------------------------------------------------------
// PUT /attributes/{id}
// ---------------------------------------------------------------------------

/// Partially update an active attribute.
///
/// A blank `name` or `type_value` leaves the column unchanged; a blank `unit`
/// clears the unit.
pub async fn update_attribute(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttribute>,
) -> AppResult<impl IntoResponse> {
    let name = attribute::normalize_name_patch(ATTRIBUTE, input.name.as_deref())?;
    let type_value = input
        .type_value
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(AttributeType::parse)
        .transpose()?;
    let unit = match input.unit.as_deref() {
        Some(raw) => Some(attribute::normalize_unit(Some(raw))?.unwrap_or_default()),
        None => None,
    };
    if let Some(percent) = input.percent {
        attribute::validate_percent(percent)?;
    }

    ensure_attribute_exists(&state.pool, id).await?;
    if let Some(ref name) = name {
        ensure_name_available(&state.pool, name, Some(id)).await?;
    }

    let normalized = UpdateAttribute {
        name,
        type_value: type_value.map(|t| t.as_str().to_string()),
        unit,
        percent: input.percent,
    };
    let updated = AttributeRepo::update(&state.pool, id, &normalized)
        .await
        .map_err(|err| name_conflict(err, normalized.name.as_deref().unwrap_or_default()))?
        .ok_or_else(|| AppError::not_found(ATTRIBUTE, id))?;

    tracing::info!(id = updated.id, name = %updated.name, "Attribute updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /attributes/{id}
// ---------------------------------------------------------------------------

/// Soft-delete an attribute. Deleting it twice is a Conflict.
pub async fn soft_delete_attribute(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_any_attribute(&state.pool, id).await?;
    if existing.is_deleted {
        return Err(attribute::already_soft_deleted(ATTRIBUTE, id).into());
    }

    // A concurrent soft delete may land between the read and the write.
    if !AttributeRepo::soft_delete(&state.pool, id).await? {
        return Err(attribute::already_soft_deleted(ATTRIBUTE, id).into());
    }

    tracing::info!(id, "Attribute soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// DELETE /attributes/{id}/hard
// ---------------------------------------------------------------------------

/// Permanently delete an attribute and everything hanging off it.
pub async fn hard_delete_attribute(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if is_unassigned_id(id) {
        return Err(AppError::not_found(ATTRIBUTE, id));
    }
    if AttributeRepo::hard_delete(&state.pool, id).await? {
        tracing::info!(id, "Attribute hard-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ATTRIBUTE, id))
    }
}

// ---------------------------------------------------------------------------
// POST /attributes/{id}/restore
// ---------------------------------------------------------------------------

/// Bring a soft-deleted attribute back, provided its name is still free.
pub async fn restore_attribute(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_any_attribute(&state.pool, id).await?;
    if !existing.is_deleted {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{ATTRIBUTE} {id} is not soft-deleted"
        ))));
    }
    ensure_name_available(&state.pool, &existing.name, Some(id)).await?;

    let restored = AttributeRepo::restore(&state.pool, id)
        .await
        .map_err(|err| name_conflict(err, &existing.name))?;
    if !restored {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{ATTRIBUTE} {id} is not soft-deleted"
        ))));
    }

    tracing::info!(id, name = %existing.name, "Attribute restored");
    Ok(StatusCode::NO_CONTENT)
}
