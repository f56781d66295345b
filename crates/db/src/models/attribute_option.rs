//! Attribute option model and DTOs.

use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `attribute_options` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttributeOption {
    pub id: DbId,
    pub attribute_id: DbId,
    pub name: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an option to a categorical attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttributeOption {
    pub name: String,
}

/// DTO for renaming an option.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttributeOption {
    pub name: Option<String>,
}
