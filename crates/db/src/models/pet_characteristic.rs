//! Pet characteristic model and DTOs.

use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pet_characteristics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PetCharacteristic {
    pub id: DbId,
    pub pet_id: DbId,
    pub attribute_id: DbId,
    pub option_id: Option<DbId>,
    pub value: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing the characteristic for one (pet, attribute) pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertPetCharacteristic {
    pub option_id: Option<DbId>,
    pub value: Option<f64>,
}
