//! User preference model and DTOs.

use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_preferences` table.
///
/// Categorical attributes populate `option_id`; numeric attributes populate
/// the inclusive `min_value`/`max_value` range.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPreference {
    pub id: DbId,
    pub user_id: DbId,
    pub attribute_id: DbId,
    pub option_id: Option<DbId>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing the preference for one (user, attribute) pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertUserPreference {
    pub option_id: Option<DbId>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}
