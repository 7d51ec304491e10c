//! Records Routes
//!
//! Standalone detail-table endpoint with CSV download support.
//!
//! - GET /api/v1/records - List filtered records as JSON or CSV

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{RecordListResponse, RecordParams, RecordRowDto};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::selection_from_params;
use crate::api::state::AppState;
use crate::dataset::PublicationRecord;

/// GET /api/v1/records
///
/// List the records matching the filter selection, in original order.
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecordParams>,
) -> ApiResult<Response> {
    let selection = selection_from_params(&state.dataset, &params.filters())?;
    let filtered = state.dataset.filter(&selection);

    match params.format.to_lowercase().as_str() {
        "csv" => {
            if !state.config.enable_export {
                return Err(ApiError::Validation(
                    "CSV export is disabled".to_string(),
                ));
            }
            Ok(csv_response(&filtered))
        }
        "json" => Ok(json_response(&filtered)),
        other => Err(ApiError::Validation(format!(
            "Invalid format: {}. Use json or csv",
            other
        ))),
    }
}

/// Format the filtered set as JSON
fn json_response(records: &[&PublicationRecord]) -> Response {
    let rows: Vec<RecordRowDto> = records
        .iter()
        .map(|r| RecordRowDto {
            country: r.country.clone(),
            health_condition_type: r.health_condition_type.clone(),
            health_condition: r.health_condition.clone(),
            year_published: r.year_published,
            author: r.author.clone(),
        })
        .collect();

    let total = rows.len();
    (StatusCode::OK, Json(RecordListResponse { records: rows, total })).into_response()
}

/// Format the filtered set as a CSV attachment
fn csv_response(records: &[&PublicationRecord]) -> Response {
    let body = format_csv(records);

    let filename = format!(
        "epimap_records_{}.csv",
        Utc::now().format("%Y%m%d_%H%M%S")
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Build the CSV body
fn format_csv(records: &[&PublicationRecord]) -> String {
    let mut csv = String::new();

    csv.push_str("country,health_condition_type,health_condition,year_published,author\n");

    for record in records {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_csv(&record.country),
            escape_csv(&record.health_condition_type),
            escape_csv(&record.health_condition),
            record.year_published,
            escape_csv(&record.author)
        ));
    }

    csv
}

/// Quote a field if it contains a delimiter or quote
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CountryAliases, Dataset};
    use crate::filter::FilterSelection;

    #[test]
    fn test_format_csv_header_and_rows() {
        let dataset = Dataset::load(&CountryAliases::default());
        let filtered = dataset.filter(&FilterSelection::unrestricted(&dataset));

        let csv = format_csv(&filtered);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 75); // header + 74 rows
        assert_eq!(
            lines[0],
            "country,health_condition_type,health_condition,year_published,author"
        );
        assert!(lines[1].starts_with("Australia,CANCERS,Cancer,2020,"));
    }

    #[test]
    fn test_format_csv_empty_set() {
        let csv = format_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("Kenya"), "Kenya");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
