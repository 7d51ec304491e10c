//! Dashboard renderer
//!
//! One pure function: `render(dataset, selection)` filters the record
//! set and projects it into the five display artifacts. No artifact
//! mutates shared state, so the same inputs always produce the same
//! view; callers (HTTP layer, tests, any future UI) re-run it whenever
//! a filter control changes.

use serde::Serialize;

use crate::aggregate::{
    condition_type_counts, country_counts, summarize, top_countries, ConditionTypeCount,
    CountryCount, SummaryMetrics,
};
use crate::dataset::Dataset;
use crate::filter::FilterSelection;

/// How many countries the bar chart shows
pub const TOP_COUNTRIES_LIMIT: usize = 10;

/// Study counts keyed by canonical country name, for the world map
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChoroplethSeries {
    pub locations: Vec<String>,
    pub values: Vec<u64>,
}

/// One line of the detail table
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableRow {
    pub country: String,
    pub health_condition_type: String,
    pub health_condition: String,
    pub year_published: i32,
    pub author: String,
}

/// The five display artifacts produced by one render pass
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardView {
    /// World choropleth input (all countries in the filtered set)
    pub choropleth: ChoroplethSeries,
    /// Horizontal bar chart input (top 10 countries by count)
    pub top_countries: Vec<CountryCount>,
    /// Pie chart input (disease-type share)
    pub condition_share: Vec<ConditionTypeCount>,
    /// Detail table rows, in original record order
    pub table: Vec<TableRow>,
    /// The three metric-card values
    pub metrics: SummaryMetrics,
}

/// Execute one full render pass over the dataset
pub fn render(dataset: &Dataset, selection: &FilterSelection) -> DashboardView {
    let filtered = dataset.filter(selection);

    let counts = country_counts(&filtered);
    let choropleth = ChoroplethSeries {
        locations: counts.iter().map(|c| c.country.clone()).collect(),
        values: counts.iter().map(|c| c.count).collect(),
    };

    let top = top_countries(counts, TOP_COUNTRIES_LIMIT);
    let share = condition_type_counts(&filtered);
    let metrics = summarize(&filtered);

    let table = filtered
        .iter()
        .map(|r| TableRow {
            country: r.country.clone(),
            health_condition_type: r.health_condition_type.clone(),
            health_condition: r.health_condition.clone(),
            year_published: r.year_published,
            author: r.author.clone(),
        })
        .collect();

    DashboardView {
        choropleth,
        top_countries: top,
        condition_share: share,
        table,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CountryAliases;
    use crate::filter::YearRange;

    fn dataset() -> Dataset {
        Dataset::load(&CountryAliases::default())
    }

    #[test]
    fn test_unrestricted_render_reproduces_totals() {
        let dataset = dataset();
        let view = render(&dataset, &FilterSelection::unrestricted(&dataset));

        assert_eq!(view.metrics.total_studies, 74);
        assert_eq!(view.table.len(), 74);
        assert_eq!(view.top_countries.len(), TOP_COUNTRIES_LIMIT);
        assert_eq!(
            view.choropleth.values.iter().sum::<u64>(),
            view.metrics.total_studies
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let dataset = dataset();
        let mut selection = FilterSelection::unrestricted(&dataset);
        selection.continent = Some("Africa".to_string());

        let first = render(&dataset, &selection);
        let second = render(&dataset, &selection);
        assert_eq!(first, second);
    }

    #[test]
    fn test_continent_filter_flows_into_every_artifact() {
        let dataset = dataset();
        let mut selection = FilterSelection::unrestricted(&dataset);
        selection.continent = Some("Africa".to_string());

        let view = render(&dataset, &selection);
        assert!(view.table.iter().all(|row| {
            dataset
                .records()
                .iter()
                .any(|r| r.country == row.country && r.continent == "Africa")
        }));
        assert_eq!(
            view.choropleth.values.iter().sum::<u64>(),
            view.metrics.total_studies
        );
        assert_eq!(
            view.condition_share.iter().map(|c| c.count).sum::<u64>(),
            view.metrics.total_studies
        );
        assert!(view.metrics.total_studies < 74);
    }

    #[test]
    fn test_empty_selection_renders_empty_artifacts() {
        let dataset = dataset();
        let view = render(&dataset, &FilterSelection::all(YearRange::new(1900, 1901)));

        assert!(view.choropleth.locations.is_empty());
        assert!(view.top_countries.is_empty());
        assert!(view.condition_share.is_empty());
        assert!(view.table.is_empty());
        assert_eq!(view.metrics.total_studies, 0);
        assert_eq!(view.metrics.countries_covered, 0);
        assert_eq!(view.metrics.condition_types, 0);
    }

    #[test]
    fn test_choropleth_uses_canonical_names() {
        let dataset = dataset();
        let view = render(&dataset, &FilterSelection::unrestricted(&dataset));

        assert!(view.choropleth.locations.contains(&"United States".to_string()));
        assert!(view.choropleth.locations.contains(&"Turkey".to_string()));
        assert!(!view.choropleth.locations.contains(&"USA".to_string()));
        assert!(!view.choropleth.locations.contains(&"Türkiye".to_string()));
    }

    #[test]
    fn test_table_keeps_record_order() {
        let dataset = dataset();
        let view = render(&dataset, &FilterSelection::unrestricted(&dataset));

        assert_eq!(view.table[0].author, "Nagesh Shukla et al");
        assert_eq!(view.table[1].country, "United States");
    }
}
