//! Application configuration.
//!
//! Library users build a [Config] directly; the CLI loads one from a TOML
//! file. Every knob has a default, so a minimal config only names the store
//! coordinates and the household's co-owners.

use std::path::Path;

use serde::Deserialize;

use crate::Error;
use crate::balance::DISPLAY_EPSILON;
use crate::chart::DEFAULT_MONTHS_TO_SHOW;
use crate::report::DEFAULT_PAGE_SIZE;

/// Where the wallet's documents live.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the managed document store.
    pub base_url: String,
    /// The user whose collection this wallet reads and writes.
    pub user_id: String,
}

/// Where receipt photos are uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// The CDN's unsigned upload endpoint.
    pub endpoint: String,
    /// The upload preset name.
    pub preset: String,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The household's two co-owners, as they appear in records.
    pub owners: [String; 2],
    /// Document store coordinates.
    pub store: StoreConfig,
    /// Receipt upload coordinates.
    pub upload: UploadConfig,
    /// Rows per report page.
    pub report_page_size: u32,
    /// Months per chart window.
    pub chart_months: usize,
    /// Display threshold for the balance breakdown.
    pub display_epsilon: f64,
    /// How often the snapshot listener polls the store, in seconds.
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owners: ["Partner A".to_owned(), "Partner B".to_owned()],
            store: StoreConfig::default(),
            upload: UploadConfig::default(),
            report_page_size: DEFAULT_PAGE_SIZE,
            chart_months: DEFAULT_MONTHS_TO_SHOW,
            display_epsilon: DISPLAY_EPSILON,
            poll_interval_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [Error::Config] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| Error::Config(format!("{}: {error}", path.display())))?;

        toml::from_str(&text).map_err(|error| Error::Config(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_match_the_product_constants() {
        let config = Config::default();

        assert_eq!(config.report_page_size, 10);
        assert_eq!(config.chart_months, 6);
        assert_eq!(config.display_epsilon, 0.01);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            owners = ["Ann", "Ben"]

            [store]
            base_url = "https://store.example"
            user_id = "uid-1"
            "#,
        )
        .unwrap();

        assert_eq!(config.owners[0], "Ann");
        assert_eq!(config.store.base_url, "https://store.example");
        assert_eq!(config.report_page_size, 10);
        assert!(config.upload.endpoint.is_empty());
    }
}
