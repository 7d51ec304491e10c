//! Dataset error types

use thiserror::Error;

/// Errors surfaced by dataset construction-time validation
///
/// The literal table cannot produce these under normal builds; they
/// exist so the constructor boundary fails fast and descriptively if
/// the table is ever edited into an inconsistent state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DatasetError {
    /// The record table is empty
    #[error("dataset contains no records")]
    Empty,

    /// A row id does not match its index position
    #[error("row id {found} at index {index} (expected {expected})")]
    RowIdMismatch {
        index: usize,
        expected: u32,
        found: u32,
    },

    /// A required text field is blank
    #[error("row {row_id}: required field '{field}' is blank")]
    BlankField { row_id: u32, field: &'static str },

    /// A publication year outside the plausible range
    #[error("row {row_id}: implausible publication year {year}")]
    ImplausibleYear { row_id: u32, year: i32 },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
