//! # Epimap
//!
//! Global Disease Distribution Dashboard - visualizes a curated set of
//! disease-research publications by country, continent, and disease
//! type on an interactive web dashboard.
//!
//! ## Features
//!
//! - **Literal dataset**: the publication survey lives in the binary;
//!   country spellings are normalized through an injectable alias table
//! - **Pure render pipeline**: filter → aggregate → view, callable from
//!   any UI or test harness
//! - **Chart-ready API**: choropleth, bar, and pie series plus the
//!   detail table and summary metrics in one response
//! - **Single-page dashboard**: embedded HTML page drawing the charts
//!   client-side
//!
//! ## Modules
//!
//! - [`dataset`]: publication records, alias table, construction
//! - [`filter`]: filter selections and option lists
//! - [`aggregate`]: group-and-count aggregations
//! - [`render`]: the dashboard view projection
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use epimap::dataset::{CountryAliases, Dataset};
//! use epimap::filter::FilterSelection;
//! use epimap::render::render;
//!
//! let dataset = Dataset::load(&CountryAliases::default());
//! dataset.validate().expect("literal table is well-formed");
//!
//! let view = render(&dataset, &FilterSelection::unrestricted(&dataset));
//! assert_eq!(view.metrics.total_studies as usize, dataset.len());
//! ```

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod render;

// Re-export top-level types for convenience
pub use dataset::{CountryAliases, Dataset, DatasetError, DatasetResult, PublicationRecord};

pub use filter::{FilterOptions, FilterSelection, YearRange};

pub use aggregate::{ConditionTypeCount, CountryCount, SummaryMetrics};

pub use render::{render, ChoroplethSeries, DashboardView, TableRow, TOP_COUNTRIES_LIMIT};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
