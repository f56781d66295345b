//! Handler for the filter-suggestion endpoint.
//!
//! Read-only: loads the active catalog and ranks it in
//! [`pawmatch_core::suggestion`].

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use pawmatch_core::suggestion::{suggest_filters, FilterSuggestion};
use pawmatch_db::models::attribute::{Attribute, AttributeWithOptions};
use pawmatch_db::repositories::AttributeRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// `{ data, suggestion }` payload of `GET /filter-suggestion`.
#[derive(Debug, Serialize)]
pub struct FilterSuggestionResponse {
    /// Every active attribute with its active options.
    pub data: Vec<AttributeWithOptions>,
    pub suggestion: FilterSuggestion<Attribute>,
}

// ---------------------------------------------------------------------------
// GET /filter-suggestion
// ---------------------------------------------------------------------------

pub async fn get_filter_suggestion(
    State(state): State<AppState>,
) -> AppResult<Json<FilterSuggestionResponse>> {
    let catalog = AttributeRepo::list_active_with_options(&state.pool).await?;
    let ranked = suggest_filters(&catalog);

    let suggestion = FilterSuggestion {
        top_attributes: ranked
            .top_attributes
            .into_iter()
            .map(|entry| entry.attribute)
            .collect(),
        total_percent: ranked.total_percent,
        message: ranked.message,
    };
    tracing::debug!(
        catalog = catalog.len(),
        suggested = suggestion.top_attributes.len(),
        total_percent = suggestion.total_percent,
        "Built filter suggestion"
    );

    Ok(Json(FilterSuggestionResponse {
        data: catalog,
        suggestion,
    }))
}
