//! Shape rules for user preferences and pet characteristics.
//!
//! Both stores keep either an option reference (categorical attributes) or
//! numeric fields (float attributes). The stores never coerce; callers check
//! the payload against the attribute's type here first.

use crate::attribute::AttributeType;
use crate::error::CoreError;
use crate::types::DbId;

/// Validate a preference payload against the attribute type.
///
/// - categorical: `option_id` required, no range bounds
/// - numeric: no `option_id`, at least one finite bound, `min <= max`
pub fn validate_preference_shape(
    attribute_type: AttributeType,
    option_id: Option<DbId>,
    min_value: Option<f64>,
    max_value: Option<f64>,
) -> Result<(), CoreError> {
    match attribute_type {
        AttributeType::String => {
            if option_id.is_none() {
                return Err(CoreError::Validation(
                    "option_id is required for a categorical attribute".to_string(),
                ));
            }
            if min_value.is_some() || max_value.is_some() {
                return Err(CoreError::Validation(
                    "min_value/max_value are not allowed for a categorical attribute".to_string(),
                ));
            }
        }
        AttributeType::Float => {
            if option_id.is_some() {
                return Err(CoreError::Validation(
                    "option_id is not allowed for a numeric attribute".to_string(),
                ));
            }
            if min_value.is_none() && max_value.is_none() {
                return Err(CoreError::Validation(
                    "At least one of min_value/max_value is required for a numeric attribute"
                        .to_string(),
                ));
            }
            for bound in [min_value, max_value].into_iter().flatten() {
                ensure_finite(bound)?;
            }
            if let (Some(min), Some(max)) = (min_value, max_value) {
                if min > max {
                    return Err(CoreError::Validation(format!(
                        "min_value ({min}) must not exceed max_value ({max})"
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Validate a characteristic payload against the attribute type.
///
/// - categorical: `option_id` required, no `value`
/// - numeric: finite `value` required, no `option_id`
pub fn validate_characteristic_shape(
    attribute_type: AttributeType,
    option_id: Option<DbId>,
    value: Option<f64>,
) -> Result<(), CoreError> {
    match attribute_type {
        AttributeType::String => {
            if option_id.is_none() || value.is_some() {
                return Err(CoreError::Validation(
                    "A categorical characteristic takes option_id and no value".to_string(),
                ));
            }
        }
        AttributeType::Float => {
            let Some(value) = value.filter(|_| option_id.is_none()) else {
                return Err(CoreError::Validation(
                    "A numeric characteristic takes value and no option_id".to_string(),
                ));
            };
            ensure_finite(value)?;
        }
    }
    Ok(())
}

fn ensure_finite(v: f64) -> Result<(), CoreError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Numeric value must be finite, got {v}")))
    }
}
