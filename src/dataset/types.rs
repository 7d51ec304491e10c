//! Core data types for the epimap publication dataset
//!
//! This module defines the fundamental record type used throughout the
//! pipeline:
//! - `PublicationRecord`: one disease-research publication with its
//!   geographic and clinical classification

use serde::{Deserialize, Serialize};

/// A single disease-research publication record
///
/// Records are immutable after construction; the full set is built once
/// from the literal table and shared read-only for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicationRecord {
    /// Sequential identifier, unique, 1..N, equal to index position + 1
    pub row_id: u32,
    /// Free-form citation string (e.g. "Nagesh Shukla et al")
    pub author: String,
    /// Publication year
    pub year_published: i32,
    /// Country name; canonical after normalization
    pub country: String,
    /// Continent name, one of a small enumerated set
    pub continent: String,
    /// Province, placeholder value when not applicable
    pub province: String,
    /// Disease category label (e.g. "CANCERS", "INFECTIOUS DISEASES")
    pub health_condition_type: String,
    /// Specific disease name (e.g. "Dengue")
    pub health_condition: String,
    /// Source of the geospatial visualization referenced by the study
    pub platform: String,
    /// Free-form descriptive finding
    pub insight: String,
}

