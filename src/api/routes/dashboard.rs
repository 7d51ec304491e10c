//! Dashboard Route
//!
//! The single render endpoint: applies the requested filters and
//! returns all five display artifacts in chart-ready shape.
//!
//! - GET /api/v1/dashboard - Render the dashboard for a selection

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use std::time::Instant;

use crate::api::dto::{
    BarDto, ChoroplethDto, DashboardResponse, FilterParams, MetricsDto, PieDto, RecordRowDto,
    RenderMeta,
};
use crate::api::error::ApiResult;
use crate::api::routes::selection_from_params;
use crate::api::state::AppState;
use crate::render::{render, DashboardView};

/// Continuous colorscale for the choropleth
const MAP_COLORSCALE: &str = "Viridis";

/// Bar color for the top-countries chart
const BAR_COLOR: &str = "#2196F3";

/// Slice palette for the disease-type pie
const PIE_COLORS: [&str; 5] = ["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336"];

/// GET /api/v1/dashboard
///
/// Execute one render pass and return the artifacts.
pub async fn render_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Json<DashboardResponse>> {
    let selection = selection_from_params(&state.dataset, &params)?;

    let start = Instant::now();
    let view = render(&state.dataset, &selection);
    let execution_time_ms = start.elapsed().as_millis() as u64;

    Ok(Json(to_response(view, execution_time_ms)))
}

/// Project the domain view into chart-ready response shapes
fn to_response(view: DashboardView, execution_time_ms: u64) -> DashboardResponse {
    let row_count = view.table.len();

    let choropleth = ChoroplethDto {
        locations: view.choropleth.locations,
        values: view.choropleth.values,
        colorscale: MAP_COLORSCALE.to_string(),
    };

    let top_countries = BarDto {
        labels: view.top_countries.iter().map(|c| c.country.clone()).collect(),
        values: view.top_countries.iter().map(|c| c.count).collect(),
        color: BAR_COLOR.to_string(),
    };

    let condition_share = PieDto {
        labels: view
            .condition_share
            .iter()
            .map(|c| c.condition_type.clone())
            .collect(),
        values: view.condition_share.iter().map(|c| c.count).collect(),
        colors: view
            .condition_share
            .iter()
            .enumerate()
            .map(|(i, _)| PIE_COLORS[i % PIE_COLORS.len()].to_string())
            .collect(),
    };

    let records = view
        .table
        .into_iter()
        .map(|row| RecordRowDto {
            country: row.country,
            health_condition_type: row.health_condition_type,
            health_condition: row.health_condition,
            year_published: row.year_published,
            author: row.author,
        })
        .collect();

    let metrics = MetricsDto {
        total_studies: view.metrics.total_studies,
        countries_covered: view.metrics.countries_covered,
        condition_types: view.metrics.condition_types,
    };

    DashboardResponse {
        choropleth,
        top_countries,
        condition_share,
        records,
        metrics,
        meta: RenderMeta {
            execution_time_ms,
            row_count,
        },
    }
}
