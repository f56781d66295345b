//! Filter suggestion: pick the attributes that weigh most in matching.
//!
//! Attributes with a positive `percent` are ranked by weight (descending),
//! ties broken by id (ascending), and the first
//! [`MAX_SUGGESTED_ATTRIBUTES`] are suggested. The call is a pure function of
//! the catalog it is given.

use serde::Serialize;

use crate::types::DbId;

/// Number of attributes suggested at most.
pub const MAX_SUGGESTED_ATTRIBUTES: usize = 3;

/// Anything that can be ranked by importance weight.
pub trait WeightedAttribute {
    fn attribute_id(&self) -> DbId;
    fn attribute_name(&self) -> &str;
    fn percent(&self) -> f64;
}

/// The suggestion block of the filter-suggestion payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterSuggestion<T> {
    pub top_attributes: Vec<T>,
    /// Sum of the suggested weights, rounded to one decimal place.
    pub total_percent: f64,
    /// `None` exactly when `top_attributes` is empty.
    pub message: Option<String>,
}

/// Rank `catalog` and build the suggestion.
pub fn suggest_filters<T>(catalog: &[T]) -> FilterSuggestion<T>
where
    T: WeightedAttribute + Clone,
{
    let mut candidates: Vec<&T> = catalog.iter().filter(|a| a.percent() > 0.0).collect();
    candidates.sort_by(|a, b| {
        b.percent()
            .total_cmp(&a.percent())
            .then_with(|| a.attribute_id().cmp(&b.attribute_id()))
    });
    candidates.truncate(MAX_SUGGESTED_ATTRIBUTES);

    let total_percent = round_to_tenth(candidates.iter().map(|a| a.percent()).sum());
    let names: Vec<&str> = candidates.iter().map(|a| a.attribute_name()).collect();
    let message = suggestion_message(&names, total_percent);

    FilterSuggestion {
        top_attributes: candidates.into_iter().cloned().collect(),
        total_percent,
        message,
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // Normalise -0.0 so an empty sum serialises as 0.0.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Human-readable summary naming the suggested attributes.
pub fn suggestion_message(names: &[&str], total_percent: f64) -> Option<String> {
    let listed = match names {
        [] => return None,
        [only] => {
            return Some(format!(
                "{only} is the most impactful filter, carrying {total_percent:.1}% of the match weight."
            ))
        }
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    };
    Some(format!(
        "{listed} are the most impactful filters, together carrying {total_percent:.1}% of the match weight."
    ))
}
