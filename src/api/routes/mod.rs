//! API route handlers

pub mod dashboard;
pub mod health;
pub mod options;
pub mod page;
pub mod records;

use crate::api::dto::{FilterParams, ALL_SENTINEL};
use crate::api::error::{ApiError, ApiResult};
use crate::dataset::Dataset;
use crate::filter::{FilterSelection, YearRange};

/// Build a domain `FilterSelection` from request parameters
///
/// "All" (or an absent parameter) lifts the corresponding restriction;
/// absent year bounds default to the dataset's observed range. The only
/// rejected input is an inverted year interval.
pub(crate) fn selection_from_params(
    dataset: &Dataset,
    params: &FilterParams,
) -> ApiResult<FilterSelection> {
    let (data_min, data_max) = dataset.year_bounds().unwrap_or((0, 0));

    let min = params.year_from.unwrap_or(data_min);
    let max = params.year_to.unwrap_or(data_max);
    if min > max {
        return Err(ApiError::Validation(format!(
            "year_from ({}) must not exceed year_to ({})",
            min, max
        )));
    }

    let continent = params
        .continent
        .as_deref()
        .filter(|c| *c != ALL_SENTINEL)
        .map(str::to_string);

    let condition_type = params
        .condition_type
        .as_deref()
        .filter(|t| *t != ALL_SENTINEL)
        .map(str::to_string);

    Ok(FilterSelection {
        continent,
        condition_type,
        years: YearRange::new(min, max),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CountryAliases;

    fn dataset() -> Dataset {
        Dataset::load(&CountryAliases::default())
    }

    #[test]
    fn test_defaults_to_unrestricted_selection() {
        let dataset = dataset();
        let selection = selection_from_params(&dataset, &FilterParams::default()).unwrap();
        assert_eq!(selection, FilterSelection::unrestricted(&dataset));
    }

    #[test]
    fn test_all_sentinel_lifts_restriction() {
        let dataset = dataset();
        let params = FilterParams {
            continent: Some(ALL_SENTINEL.to_string()),
            condition_type: Some("CANCERS".to_string()),
            year_from: None,
            year_to: None,
        };
        let selection = selection_from_params(&dataset, &params).unwrap();
        assert_eq!(selection.continent, None);
        assert_eq!(selection.condition_type.as_deref(), Some("CANCERS"));
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let dataset = dataset();
        let params = FilterParams {
            year_from: Some(2020),
            year_to: Some(2010),
            ..Default::default()
        };
        assert!(matches!(
            selection_from_params(&dataset, &params),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_partial_year_bounds_fill_from_dataset() {
        let dataset = dataset();
        let params = FilterParams {
            year_from: Some(2015),
            ..Default::default()
        };
        let selection = selection_from_params(&dataset, &params).unwrap();
        assert_eq!(selection.years, YearRange::new(2015, 2023));
    }

    #[test]
    fn test_out_of_bounds_range_is_accepted() {
        // A range entirely outside the data is valid; it just filters
        // to the empty set.
        let dataset = dataset();
        let params = FilterParams {
            year_from: Some(1950),
            year_to: Some(1960),
            ..Default::default()
        };
        let selection = selection_from_params(&dataset, &params).unwrap();
        assert!(dataset.filter(&selection).is_empty());
    }
}
