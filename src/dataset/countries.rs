//! Country-name normalization
//!
//! Source citations spell country names inconsistently ("USA", "CHINA",
//! "malawi", the occasional typo). The choropleth renderer looks regions
//! up by canonical name, so raw names are resolved through an alias
//! table at dataset construction time.
//!
//! The table is an explicit, injectable lookup rather than inline data:
//! callers can extend it with `with_alias` as new spellings surface in
//! the source material. Unmapped names pass through unchanged; they may
//! fail to render on the map but are still retained in tabular views.

use std::collections::HashMap;

/// Lookup table mapping raw country spellings to canonical names
#[derive(Debug, Clone)]
pub struct CountryAliases {
    map: HashMap<String, String>,
}

impl Default for CountryAliases {
    /// The known aliases observed in the publication data
    fn default() -> Self {
        Self::new()
            .with_alias("USA", "United States")
            .with_alias("UK", "United Kingdom")
            .with_alias("Türkiye", "Turkey")
            .with_alias("CHINA", "China")
            .with_alias("Zanzibar", "Tanzania")
            .with_alias("malawi", "Malawi")
            .with_alias("Brazi", "Brazil")
            .with_alias("EthiopiaMelioidosis", "Ethiopia")
            .with_alias("Chinese", "China")
    }
}

impl CountryAliases {
    /// Create an empty alias table
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Builder method: register one raw → canonical mapping
    ///
    /// Invariant: the canonical side must not itself be an alias key,
    /// so that normalization is idempotent.
    pub fn with_alias(mut self, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.map.insert(raw.into(), canonical.into());
        self
    }

    /// Look up the canonical name for a raw spelling, if one is mapped
    pub fn canonical(&self, raw: &str) -> Option<&str> {
        self.map.get(raw).map(|s| s.as_str())
    }

    /// Resolve a raw spelling: the canonical name if mapped, else unchanged
    pub fn normalize(&self, raw: &str) -> String {
        self.canonical(raw).unwrap_or(raw).to_string()
    }

    /// Number of registered aliases
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over raw spellings in the table
    pub fn raw_names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }
}
