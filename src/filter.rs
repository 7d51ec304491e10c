//! Filter engine
//!
//! Applies the three sidebar selections (continent, disease type, year
//! range) to the record set as a pure, order-preserving predicate.
//! `None` on a selector means the "All" sentinel; the HTTP layer maps
//! the literal string to it. An empty result is a valid state that all
//! downstream aggregations must render as zeros, never an error.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, PublicationRecord};

/// Inclusive publication-year interval
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Create a range; caller is responsible for min <= max
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check membership
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

/// The user's current filter selections
///
/// `None` encodes "All" for the two categorical selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub continent: Option<String>,
    pub condition_type: Option<String>,
    pub years: YearRange,
}

impl FilterSelection {
    /// Selection matching everything within the given year range
    pub fn all(years: YearRange) -> Self {
        Self {
            continent: None,
            condition_type: None,
            years,
        }
    }

    /// Selection matching the full dataset (year range from its bounds)
    pub fn unrestricted(dataset: &Dataset) -> Self {
        let (min, max) = dataset.year_bounds().unwrap_or((0, 0));
        Self::all(YearRange::new(min, max))
    }

    /// Test one record against all three predicates
    pub fn matches(&self, record: &PublicationRecord) -> bool {
        let continent_ok = self
            .continent
            .as_deref()
            .map(|c| record.continent == c)
            .unwrap_or(true);

        let type_ok = self
            .condition_type
            .as_deref()
            .map(|t| record.health_condition_type == t)
            .unwrap_or(true);

        continent_ok && type_ok && self.years.contains(record.year_published)
    }
}

impl Dataset {
    /// Return the matching subset, preserving original relative order
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&PublicationRecord> {
        self.records()
            .iter()
            .filter(|r| selection.matches(r))
            .collect()
    }
}

/// Option lists for the filter control surface
///
/// Computed from the unfiltered dataset so the selectable choices never
/// shrink as other filters are applied. The "All" sentinel is prepended
/// by the HTTP layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterOptions {
    /// Sorted distinct continents present in the data
    pub continents: Vec<String>,
    /// Sorted distinct disease types present in the data
    pub condition_types: Vec<String>,
    /// Global minimum publication year
    pub year_min: i32,
    /// Global maximum publication year
    pub year_max: i32,
}

impl FilterOptions {
    /// Derive the option lists from the full dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut continents: Vec<String> = dataset
            .records()
            .iter()
            .map(|r| r.continent.clone())
            .collect();
        continents.sort();
        continents.dedup();

        let mut condition_types: Vec<String> = dataset
            .records()
            .iter()
            .map(|r| r.health_condition_type.clone())
            .collect();
        condition_types.sort();
        condition_types.dedup();

        let (year_min, year_max) = dataset.year_bounds().unwrap_or((0, 0));

        Self {
            continents,
            condition_types,
            year_min,
            year_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CountryAliases;

    fn dataset() -> Dataset {
        Dataset::load(&CountryAliases::default())
    }

    #[test]
    fn test_unrestricted_selection_keeps_everything() {
        let dataset = dataset();
        let selection = FilterSelection::unrestricted(&dataset);
        assert_eq!(dataset.filter(&selection).len(), dataset.len());
    }

    #[test]
    fn test_continent_filter_excludes_other_continents() {
        let dataset = dataset();
        let mut selection = FilterSelection::unrestricted(&dataset);
        selection.continent = Some("Africa".to_string());

        let filtered = dataset.filter(&selection);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|r| r.continent == "Africa"));
        assert!(filtered.len() < dataset.len());
    }

    #[test]
    fn test_condition_type_filter() {
        let dataset = dataset();
        let mut selection = FilterSelection::unrestricted(&dataset);
        selection.condition_type = Some("CANCERS".to_string());

        let filtered = dataset.filter(&selection);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|r| r.health_condition_type == "CANCERS"));
    }

    #[test]
    fn test_year_range_outside_bounds_yields_empty() {
        let dataset = dataset();
        let selection = FilterSelection::all(YearRange::new(1950, 1960));
        assert!(dataset.filter(&selection).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let dataset = dataset();
        let mut selection = FilterSelection::unrestricted(&dataset);
        selection.continent = Some("Asia".to_string());

        let filtered = dataset.filter(&selection);
        let ids: Vec<u32> = filtered.iter().map(|r| r.row_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_filter_monotonicity() {
        let dataset = dataset();
        let (min, max) = dataset.year_bounds().unwrap();

        let strict = FilterSelection {
            continent: Some("Africa".to_string()),
            condition_type: Some("INFECTIOUS DISEASES".to_string()),
            years: YearRange::new(min + 3, max - 3),
        };
        let strict_count = dataset.filter(&strict).len();

        // Relaxing any one filter to "All" / the full range can only
        // add or retain records.
        let mut relaxed = strict.clone();
        relaxed.continent = None;
        assert!(dataset.filter(&relaxed).len() >= strict_count);

        let mut relaxed = strict.clone();
        relaxed.condition_type = None;
        assert!(dataset.filter(&relaxed).len() >= strict_count);

        let mut relaxed = strict;
        relaxed.years = YearRange::new(min, max);
        assert!(dataset.filter(&relaxed).len() >= strict_count);

        assert!(strict_count <= dataset.len());
    }

    #[test]
    fn test_unknown_values_match_nothing() {
        let dataset = dataset();
        let mut selection = FilterSelection::unrestricted(&dataset);
        selection.continent = Some("Antarctica".to_string());
        assert!(dataset.filter(&selection).is_empty());
    }

    #[test]
    fn test_options_from_unfiltered_dataset() {
        let dataset = dataset();
        let options = FilterOptions::from_dataset(&dataset);

        assert_eq!(
            options.continents,
            vec![
                "Africa",
                "Asia",
                "Australia",
                "Europe",
                "North America",
                "South America"
            ]
        );
        assert_eq!(
            options.condition_types,
            vec![
                "CANCERS",
                "INFECTIOUS DISEASES",
                "LIFE STYLE DISEASES",
                "RESPIRATORY DISEASES"
            ]
        );
        assert_eq!(options.year_min, 2007);
        assert_eq!(options.year_max, 2023);
    }
}
