//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON. The "All"
//! sentinel the sidebar controls use lives at this boundary; the
//! domain layer works with `Option` instead.

use serde::{Deserialize, Serialize};

/// The literal sentinel the selectors use for "no restriction"
pub const ALL_SENTINEL: &str = "All";

// ============================================
// FILTER DTOs
// ============================================

/// Shared query parameters for the filtered endpoints
///
/// Absent parameters default to "All" / the full observed year range.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Continent name or "All"
    #[serde(default)]
    pub continent: Option<String>,
    /// Disease-type label or "All"
    #[serde(default)]
    pub condition_type: Option<String>,
    /// Inclusive lower year bound
    #[serde(default)]
    pub year_from: Option<i32>,
    /// Inclusive upper year bound
    #[serde(default)]
    pub year_to: Option<i32>,
}

/// Filter options response
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    /// "All" plus the sorted distinct continents in the data
    pub continents: Vec<String>,
    /// "All" plus the sorted distinct disease types in the data
    pub condition_types: Vec<String>,
    /// Global minimum publication year
    pub year_min: i32,
    /// Global maximum publication year
    pub year_max: i32,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Choropleth map input: counts keyed by canonical country name
#[derive(Debug, Serialize)]
pub struct ChoroplethDto {
    /// Canonical country names
    pub locations: Vec<String>,
    /// Study count per country
    pub values: Vec<u64>,
    /// Continuous colorscale name for the map renderer
    pub colorscale: String,
}

/// Horizontal bar chart input: top countries by study count
#[derive(Debug, Serialize)]
pub struct BarDto {
    /// Country names, descending by count
    pub labels: Vec<String>,
    /// Study counts
    pub values: Vec<u64>,
    /// Suggested bar color
    pub color: String,
}

/// Pie chart input: disease-type share
#[derive(Debug, Serialize)]
pub struct PieDto {
    /// Disease-type labels
    pub labels: Vec<String>,
    /// Study counts
    pub values: Vec<u64>,
    /// Suggested slice colors
    pub colors: Vec<String>,
}

/// One line of the detail table
#[derive(Debug, Serialize)]
pub struct RecordRowDto {
    pub country: String,
    pub health_condition_type: String,
    pub health_condition: String,
    pub year_published: i32,
    pub author: String,
}

/// The three metric-card values
#[derive(Debug, Serialize)]
pub struct MetricsDto {
    /// Total filtered record count
    pub total_studies: u64,
    /// Distinct country count
    pub countries_covered: u64,
    /// Distinct disease-type count
    pub condition_types: u64,
}

/// Render metadata
#[derive(Debug, Serialize)]
pub struct RenderMeta {
    /// Render execution time in milliseconds
    pub execution_time_ms: u64,
    /// Number of records in the filtered set
    pub row_count: usize,
}

/// Full dashboard response: the five artifacts plus metadata
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub choropleth: ChoroplethDto,
    pub top_countries: BarDto,
    pub condition_share: PieDto,
    pub records: Vec<RecordRowDto>,
    pub metrics: MetricsDto,
    pub meta: RenderMeta,
}

// ============================================
// RECORDS DTOs
// ============================================

/// Query parameters for the records endpoint
///
/// Same filter fields as `FilterParams`, plus the output format.
#[derive(Debug, Deserialize)]
pub struct RecordParams {
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub condition_type: Option<String>,
    #[serde(default)]
    pub year_from: Option<i32>,
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Output format: json or csv
    #[serde(default = "default_records_format")]
    pub format: String,
}

impl RecordParams {
    /// View the filter fields as a `FilterParams`
    pub fn filters(&self) -> FilterParams {
        FilterParams {
            continent: self.continent.clone(),
            condition_type: self.condition_type.clone(),
            year_from: self.year_from,
            year_to: self.year_to,
        }
    }
}

fn default_records_format() -> String {
    "json".to_string()
}

/// Records listing response (JSON format)
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    /// Matching records, in original order
    pub records: Vec<RecordRowDto>,
    /// Total count
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Number of records loaded
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
