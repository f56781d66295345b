//! Attribute entity model and DTOs.

use pawmatch_core::suggestion::WeightedAttribute;
use pawmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::attribute_option::AttributeOption;

/// A row from the `attributes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attribute {
    pub id: DbId,
    pub name: String,
    /// `"string"` (categorical) or `"float"` (numeric).
    pub type_value: String,
    pub unit: Option<String>,
    /// Importance weight in `[0, 100]`; `0` means no suggestion priority.
    pub percent: f64,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An attribute with its active options, as exposed to filter UIs.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeWithOptions {
    #[serde(flatten)]
    pub attribute: Attribute,
    pub options: Vec<AttributeOption>,
}

/// DTO for creating a new attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttribute {
    pub name: String,
    pub type_value: String,
    pub unit: Option<String>,
    pub percent: Option<f64>,
}

/// DTO for updating an attribute. All fields optional.
///
/// A blank `name` or `type_value` leaves the column unchanged. A blank
/// `unit` clears it; an absent `unit` leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttribute {
    pub name: Option<String>,
    pub type_value: Option<String>,
    pub unit: Option<String>,
    pub percent: Option<f64>,
}

impl WeightedAttribute for Attribute {
    fn attribute_id(&self) -> DbId {
        self.id
    }

    fn attribute_name(&self) -> &str {
        &self.name
    }

    fn percent(&self) -> f64 {
        self.percent
    }
}

impl WeightedAttribute for AttributeWithOptions {
    fn attribute_id(&self) -> DbId {
        self.attribute.id
    }

    fn attribute_name(&self) -> &str {
        &self.attribute.name
    }

    fn percent(&self) -> f64 {
        self.attribute.percent
    }
}
