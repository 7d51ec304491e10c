//! Application State
//!
//! Shared state accessible by all API handlers.
//! The dataset is constructed once at startup (it is invariant, so
//! memoizing it is safe); every request re-runs filtering and
//! aggregation against the same records.

use crate::dataset::Dataset;
use crate::filter::FilterOptions;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The normalized, validated publication dataset
    pub dataset: Arc<Dataset>,
    /// Filter option lists, derived once from the unfiltered dataset
    pub options: Arc<FilterOptions>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a loaded dataset
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        let options = Arc::new(FilterOptions::from_dataset(&dataset));
        Self {
            dataset,
            options,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable the CSV download on the records endpoint
    pub enable_export: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            enable_export: true,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CountryAliases;

    #[test]
    fn test_state_derives_options_once() {
        let dataset = Arc::new(Dataset::load(&CountryAliases::default()));
        let state = AppState::new(dataset, ApiConfig::default());
        assert_eq!(state.options.year_min, 2007);
        assert_eq!(state.options.continents.len(), 6);
    }

    #[test]
    fn test_addr_formatting() {
        let config = ApiConfig::new("127.0.0.1", 9999);
        assert_eq!(config.addr(), "127.0.0.1:9999");
    }
}
