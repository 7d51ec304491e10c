//! Options Route
//!
//! Serves the filter control surface: the selectable continents and
//! disease types ("All" first) and the dataset's year bounds. Options
//! come from the unfiltered dataset, so the lists never shrink as
//! other filters are applied.
//!
//! - GET /api/v1/options - Filter option lists

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{OptionsResponse, ALL_SENTINEL};
use crate::api::state::AppState;

/// GET /api/v1/options
pub async fn filter_options(State(state): State<Arc<AppState>>) -> Json<OptionsResponse> {
    let mut continents = vec![ALL_SENTINEL.to_string()];
    continents.extend(state.options.continents.iter().cloned());

    let mut condition_types = vec![ALL_SENTINEL.to_string()];
    condition_types.extend(state.options.condition_types.iter().cloned());

    Json(OptionsResponse {
        continents,
        condition_types,
        year_min: state.options.year_min,
        year_max: state.options.year_max,
    })
}
