//! Attribute catalog rules: value types, name normalisation, weight bounds.
//!
//! The repository and HTTP layers both route through these helpers so a
//! duplicate name produces the same [`CoreError::Conflict`] message whether it
//! was caught by the pre-insert check or by the unique index at commit time.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Value types
   -------------------------------------------------------------------------- */

/// Categorical attribute: values are resolved through attribute options.
pub const TYPE_STRING: &str = "string";

/// Numeric attribute: values are floats, preferences are inclusive ranges.
pub const TYPE_FLOAT: &str = "float";

/// All valid `type_value` column values.
pub const VALID_TYPES: &[&str] = &[TYPE_STRING, TYPE_FLOAT];

/// How values of an attribute are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Float,
}

impl AttributeType {
    /// Parse a stored or user-supplied `type_value`. Surrounding whitespace
    /// and case are ignored.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            TYPE_STRING => Ok(Self::String),
            TYPE_FLOAT => Ok(Self::Float),
            other => Err(CoreError::Validation(format!(
                "Invalid type_value '{other}'. Must be one of: {}",
                VALID_TYPES.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => TYPE_STRING,
            Self::Float => TYPE_FLOAT,
        }
    }

    pub fn is_categorical(self) -> bool {
        matches!(self, Self::String)
    }
}

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length (in characters) of an attribute or option name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length (in characters) of a display unit.
pub const MAX_UNIT_LEN: usize = 20;

/// Lowest allowed importance weight.
pub const MIN_PERCENT: f64 = 0.0;

/// Highest allowed importance weight.
pub const MAX_PERCENT: f64 = 100.0;

/// Unique index guarding active attribute names.
pub const UQ_ACTIVE_ATTRIBUTE_NAME: &str = "uq_attributes_active_name";

/// Unique index guarding active option names within one attribute.
pub const UQ_ACTIVE_OPTION_NAME: &str = "uq_attribute_options_active_name";

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Trim a required name and reject it if blank or too long.
///
/// `kind` names the entity in the error message ("Attribute", "Option").
pub fn normalize_name(kind: &str, raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!(
            "{kind} name must not be empty"
        )));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{kind} name too long: {len} chars (max {MAX_NAME_LEN})"
        )));
    }
    Ok(name.to_string())
}

/// Case-folded form of a name, stored as `name_key` and used for uniqueness
/// among active rows.
///
/// Folded here with full Unicode case mapping so the result does not depend
/// on the database server's ctype.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Interpret the `name` field of a partial update.
///
/// Absent and blank both mean "leave the name alone"; anything else must pass
/// [`normalize_name`].
pub fn normalize_name_patch(kind: &str, raw: Option<&str>) -> Result<Option<String>, CoreError> {
    match raw {
        Some(value) if !value.trim().is_empty() => normalize_name(kind, value).map(Some),
        _ => Ok(None),
    }
}

/// Trim an optional unit. Blank becomes `None`.
pub fn normalize_unit(raw: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(unit) = raw.map(str::trim).filter(|u| !u.is_empty()) else {
        return Ok(None);
    };
    let len = unit.chars().count();
    if len > MAX_UNIT_LEN {
        return Err(CoreError::Validation(format!(
            "Unit too long: {len} chars (max {MAX_UNIT_LEN})"
        )));
    }
    Ok(Some(unit.to_string()))
}

/// Validate an importance weight: finite and within `[0, 100]`.
pub fn validate_percent(percent: f64) -> Result<(), CoreError> {
    if !percent.is_finite() || !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
        return Err(CoreError::Validation(format!(
            "Percent must be between {MIN_PERCENT} and {MAX_PERCENT}, got {percent}"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Shared error constructors
   -------------------------------------------------------------------------- */

/// Conflict raised for a duplicate active attribute name.
pub fn duplicate_attribute_name(name: &str) -> CoreError {
    CoreError::Conflict(format!("An active attribute named '{}' already exists", name.trim()))
}

/// Conflict raised for a duplicate active option name on one attribute.
pub fn duplicate_option_name(name: &str) -> CoreError {
    CoreError::Conflict(format!(
        "An active option named '{}' already exists for this attribute",
        name.trim()
    ))
}

/// Conflict raised when soft-deleting a row that is already soft-deleted.
pub fn already_soft_deleted(entity: &str, id: i64) -> CoreError {
    CoreError::Conflict(format!("{entity} {id} is already soft-deleted"))
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_accepts_both_types_case_insensitively() {
        assert_eq!(AttributeType::parse("string").unwrap(), AttributeType::String);
        assert_eq!(AttributeType::parse(" FLOAT ").unwrap(), AttributeType::Float);
        assert_eq!(AttributeType::Float.as_str(), "float");
    }

    #[test]
    fn parse_rejects_unknown_type() {
        assert_matches!(AttributeType::parse("int"), Err(CoreError::Validation(_)));
        assert_matches!(AttributeType::parse(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn only_string_is_categorical() {
        assert!(AttributeType::String.is_categorical());
        assert!(!AttributeType::Float.is_categorical());
    }

    #[test]
    fn normalize_name_trims() {
        assert_eq!(normalize_name("Attribute", "  Chiều cao ").unwrap(), "Chiều cao");
    }

    #[test]
    fn normalize_name_rejects_blank() {
        assert_matches!(normalize_name("Attribute", "   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn normalize_name_counts_chars_not_bytes() {
        let name = "ề".repeat(MAX_NAME_LEN);
        assert!(normalize_name("Attribute", &name).is_ok());
        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        assert_matches!(normalize_name("Attribute", &too_long), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_key_folds_non_ascii_letters() {
        assert_eq!(name_key(" CHIỀU CAO "), "chiều cao");
        assert_eq!(name_key("Chiều cao"), name_key("CHIỀU CAO"));
        assert_eq!(name_key("ĐỘ TUỔI"), "độ tuổi");
    }

    #[test]
    fn blank_name_patch_means_unchanged() {
        assert_eq!(normalize_name_patch("Attribute", None).unwrap(), None);
        assert_eq!(normalize_name_patch("Attribute", Some("  ")).unwrap(), None);
        assert_eq!(
            normalize_name_patch("Attribute", Some(" Size ")).unwrap(),
            Some("Size".to_string())
        );
    }

    #[test]
    fn unit_blank_becomes_none() {
        assert_eq!(normalize_unit(Some("  ")).unwrap(), None);
        assert_eq!(normalize_unit(Some(" cm ")).unwrap(), Some("cm".to_string()));
        assert_matches!(normalize_unit(Some(&"x".repeat(21))), Err(CoreError::Validation(_)));
    }

    #[test]
    fn percent_bounds() {
        assert!(validate_percent(0.0).is_ok());
        assert!(validate_percent(100.0).is_ok());
        assert!(validate_percent(42.5).is_ok());
        assert_matches!(validate_percent(-0.1), Err(CoreError::Validation(_)));
        assert_matches!(validate_percent(100.01), Err(CoreError::Validation(_)));
        assert_matches!(validate_percent(f64::NAN), Err(CoreError::Validation(_)));
    }

    #[test]
    fn duplicate_name_message_is_stable() {
        let a = duplicate_attribute_name("Color ").to_string();
        let b = duplicate_attribute_name("Color").to_string();
        assert_eq!(a, b);
    }
}
