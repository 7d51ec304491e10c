//! Publication dataset
//!
//! The full, immutable set of disease-research publication records.
//! Construction transcribes the literal table, assigns sequential row
//! ids, and resolves raw country spellings through the alias table.
//! The set is built once at startup and shared read-only; every render
//! pass works against the same records.

pub mod countries;
pub mod error;
mod records;
pub mod types;

pub use countries::CountryAliases;
pub use error::{DatasetError, DatasetResult};
pub use types::PublicationRecord;

use records::{PROVINCE_PLACEHOLDER, RAW_ROWS, SOURCE_PLATFORM};

/// The full publication record set with normalized country names
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<PublicationRecord>,
}

impl Dataset {
    /// Build the dataset from the literal table, normalizing country
    /// names through the given alias lookup
    pub fn load(aliases: &CountryAliases) -> Self {
        let records = RAW_ROWS
            .iter()
            .enumerate()
            .map(
                |(i, (author, year, country, continent, condition_type, condition, insight))| {
                    PublicationRecord {
                        row_id: i as u32 + 1,
                        author: author.to_string(),
                        year_published: *year,
                        country: aliases.normalize(country),
                        continent: continent.to_string(),
                        province: PROVINCE_PLACEHOLDER.to_string(),
                        health_condition_type: condition_type.to_string(),
                        health_condition: condition.to_string(),
                        platform: SOURCE_PLATFORM.to_string(),
                        insight: insight.to_string(),
                    }
                },
            )
            .collect();

        Self { records }
    }

    /// All records, in table order
    pub fn records(&self) -> &[PublicationRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Global (min, max) publication year across all records
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year_published).min()?;
        let max = self.records.iter().map(|r| r.year_published).max()?;
        Some((min, max))
    }

    /// Startup validation of the constructed record set
    ///
    /// Enforces the invariants the original table format guaranteed
    /// structurally: sequential row ids, no blank required fields,
    /// plausible years. Called once before serving; a failure here is
    /// a defect in the literal table, not a runtime condition.
    pub fn validate(&self) -> DatasetResult<()> {
        if self.records.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (i, record) in self.records.iter().enumerate() {
            let expected = i as u32 + 1;
            if record.row_id != expected {
                return Err(DatasetError::RowIdMismatch {
                    index: i,
                    expected,
                    found: record.row_id,
                });
            }

            for (field, value) in [
                ("author", &record.author),
                ("country", &record.country),
                ("continent", &record.continent),
                ("health_condition_type", &record.health_condition_type),
                ("health_condition", &record.health_condition),
            ] {
                if value.trim().is_empty() {
                    return Err(DatasetError::BlankField {
                        row_id: record.row_id,
                        field,
                    });
                }
            }

            if record.year_published < 1990 || record.year_published > 2100 {
                return Err(DatasetError::ImplausibleYear {
                    row_id: record.row_id,
                    year: record.year_published,
                });
            }
        }

        Ok(())
    }
}
