//! Handlers for measured pet characteristics.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pawmatch_core::attribute::AttributeType;
use pawmatch_core::preference::validate_characteristic_shape;
use pawmatch_core::types::DbId;
use pawmatch_db::models::pet_characteristic::UpsertPetCharacteristic;
use pawmatch_db::repositories::PetCharacteristicRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::attribute_options::ensure_option_of_attribute;
use crate::handlers::attributes::ensure_attribute_exists;
use crate::response::DataResponse;
use crate::state::AppState;

const CHARACTERISTIC: &str = "Characteristic for attribute";

// ---------------------------------------------------------------------------
// GET /pets/{pet_id}/characteristics
// ---------------------------------------------------------------------------

pub async fn list_characteristics(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let items = PetCharacteristicRepo::list_by_pet(&state.pool, pet_id).await?;
    tracing::debug!(pet_id, count = items.len(), "Listed pet characteristics");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /pets/{pet_id}/characteristics/{attribute_id}
// ---------------------------------------------------------------------------

pub async fn get_characteristic(
    State(state): State<AppState>,
    Path((pet_id, attribute_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let characteristic = PetCharacteristicRepo::find(&state.pool, pet_id, attribute_id)
        .await?
        .ok_or_else(|| AppError::not_found(CHARACTERISTIC, attribute_id))?;
    Ok(Json(DataResponse { data: characteristic }))
}

// ---------------------------------------------------------------------------
// PUT /pets/{pet_id}/characteristics/{attribute_id}
// ---------------------------------------------------------------------------

/// Create or replace a pet's value for one attribute.
pub async fn upsert_characteristic(
    State(state): State<AppState>,
    Path((pet_id, attribute_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpsertPetCharacteristic>,
) -> AppResult<impl IntoResponse> {
    let attribute = ensure_attribute_exists(&state.pool, attribute_id).await?;
    let attribute_type = AttributeType::parse(&attribute.type_value)?;
    validate_characteristic_shape(attribute_type, input.option_id, input.value)?;
    if let Some(option_id) = input.option_id {
        ensure_option_of_attribute(&state.pool, attribute_id, option_id).await?;
    }

    let saved = PetCharacteristicRepo::upsert(&state.pool, pet_id, attribute_id, &input).await?;
    tracing::info!(id = saved.id, pet_id, attribute_id, "Pet characteristic saved");
    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// DELETE /pets/{pet_id}/characteristics/{attribute_id}
// ---------------------------------------------------------------------------

pub async fn delete_characteristic(
    State(state): State<AppState>,
    Path((pet_id, attribute_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if PetCharacteristicRepo::delete(&state.pool, pet_id, attribute_id).await? {
        tracing::info!(pet_id, attribute_id, "Pet characteristic cleared");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(CHARACTERISTIC, attribute_id))
    }
}
