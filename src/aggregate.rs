//! Aggregations over the filtered record set
//!
//! Three independent, stateless group-and-count passes feed the charts
//! and metric cards. Groups are accumulated in first-appearance order;
//! the top-N view sorts descending by count with a stable sort, so
//! equal counts keep that discovery order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::dataset::PublicationRecord;

/// Number of studies attributed to one country
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// Number of studies in one disease-type category
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConditionTypeCount {
    pub condition_type: String,
    pub count: u64,
}

/// The three scalar metric-card values
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SummaryMetrics {
    /// Total filtered record count
    pub total_studies: u64,
    /// Distinct countries in the filtered set
    pub countries_covered: u64,
    /// Distinct disease types in the filtered set
    pub condition_types: u64,
}

/// Group by country and count, in first-appearance order
pub fn country_counts(records: &[&PublicationRecord]) -> Vec<CountryCount> {
    let mut counts: Vec<CountryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.country.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(record.country.as_str(), counts.len());
                counts.push(CountryCount {
                    country: record.country.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Sort country counts descending and keep the first `limit`
///
/// The sort is stable, so countries with equal counts stay in their
/// discovery order.
pub fn top_countries(mut counts: Vec<CountryCount>, limit: usize) -> Vec<CountryCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Group by disease type and count, in first-appearance order
pub fn condition_type_counts(records: &[&PublicationRecord]) -> Vec<ConditionTypeCount> {
    let mut counts: Vec<ConditionTypeCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.health_condition_type.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(record.health_condition_type.as_str(), counts.len());
                counts.push(ConditionTypeCount {
                    condition_type: record.health_condition_type.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Compute the metric-card values for a filtered set
pub fn summarize(records: &[&PublicationRecord]) -> SummaryMetrics {
    let countries: HashSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let types: HashSet<&str> = records
        .iter()
        .map(|r| r.health_condition_type.as_str())
        .collect();

    SummaryMetrics {
        total_studies: records.len() as u64,
        countries_covered: countries.len() as u64,
        condition_types: types.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CountryAliases, Dataset};
    use crate::filter::FilterSelection;

    fn filtered_all(dataset: &Dataset) -> Vec<&PublicationRecord> {
        dataset.filter(&FilterSelection::unrestricted(dataset))
    }

    #[test]
    fn test_country_counts_conserve_total() {
        let dataset = Dataset::load(&CountryAliases::default());
        let records = filtered_all(&dataset);

        let total: u64 = country_counts(&records).iter().map(|c| c.count).sum();
        assert_eq!(total, records.len() as u64);

        let type_total: u64 = condition_type_counts(&records).iter().map(|c| c.count).sum();
        assert_eq!(type_total, records.len() as u64);
    }

    #[test]
    fn test_country_counts_merge_aliases() {
        // "CHINA", "Chinese", and "China" rows all land in one group
        // after normalization.
        let dataset = Dataset::load(&CountryAliases::default());
        let records = filtered_all(&dataset);
        let counts = country_counts(&records);

        let china = counts.iter().find(|c| c.country == "China").unwrap();
        assert_eq!(china.count, 5);
        assert!(counts.iter().all(|c| c.country != "CHINA"));
        assert!(counts.iter().all(|c| c.country != "Chinese"));
    }

    #[test]
    fn test_discovery_order() {
        let dataset = Dataset::load(&CountryAliases::default());
        let records = filtered_all(&dataset);
        let counts = country_counts(&records);

        // Row 1 is Australia, row 2 the United States; their groups
        // appear in that order.
        assert_eq!(counts[0].country, "Australia");
        assert_eq!(counts[1].country, "United States");
    }

    #[test]
    fn test_top_countries_bound() {
        let dataset = Dataset::load(&CountryAliases::default());
        let records = filtered_all(&dataset);
        let counts = country_counts(&records);
        let distinct = counts.len();

        let top = top_countries(counts.clone(), 10);
        assert_eq!(top.len(), 10.min(distinct));

        // Descending by count.
        for pair in top.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }

        // A limit above the distinct-country count returns everything.
        let all = top_countries(counts, 1000);
        assert_eq!(all.len(), distinct);
    }

    #[test]
    fn test_top_countries_ties_keep_discovery_order() {
        let dataset = Dataset::load(&CountryAliases::default());
        let records = filtered_all(&dataset);
        let counts = country_counts(&records);

        let discovery_rank: HashMap<&str, usize> = counts
            .iter()
            .enumerate()
            .map(|(i, c)| (c.country.as_str(), i))
            .collect();

        let top = top_countries(counts.clone(), counts.len());
        for pair in top.windows(2) {
            if pair[0].count == pair[1].count {
                assert!(
                    discovery_rank[pair[0].country.as_str()]
                        < discovery_rank[pair[1].country.as_str()],
                    "tie between {:?} and {:?} broke discovery order",
                    pair[0].country,
                    pair[1].country
                );
            }
        }
    }

    #[test]
    fn test_empty_input_yields_zeros() {
        let records: Vec<&PublicationRecord> = Vec::new();

        assert!(country_counts(&records).is_empty());
        assert!(condition_type_counts(&records).is_empty());
        assert!(top_countries(Vec::new(), 10).is_empty());

        let metrics = summarize(&records);
        assert_eq!(metrics.total_studies, 0);
        assert_eq!(metrics.countries_covered, 0);
        assert_eq!(metrics.condition_types, 0);
    }

    #[test]
    fn test_summarize_full_dataset() {
        let dataset = Dataset::load(&CountryAliases::default());
        let records = filtered_all(&dataset);
        let metrics = summarize(&records);

        assert_eq!(metrics.total_studies, 74);
        assert_eq!(metrics.condition_types, 4);
        assert_eq!(
            metrics.countries_covered,
            country_counts(&records).len() as u64
        );
    }
}
