//! Application settings loaded from config.toml
//!
//! Every section and field has a default, so a missing or partial config file still
//! yields a runnable configuration. `DATABASE_URL` and `APEX_BIND_ADDRESS` from the
//! environment (or `.env`) take precedence over the file.

use crate::entities::FiscalMonth;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// OTB planning window and listing limits
    pub planning: PlanningConfig,
    /// Fixture normalizer inputs
    pub fixtures: FixturesConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "0.0.0.0:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL
    pub url: String,
    /// Create missing tables at startup
    pub create_tables: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://apex_planner.sqlite?mode=rwc".to_string(),
            create_tables: true,
        }
    }
}

/// OTB planning window and listing limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Fiscal year the OTB summary aggregates over
    pub fiscal_year: i32,
    /// Months included in the OTB summary
    pub otb_months: Vec<FiscalMonth>,
    /// Maximum number of sales returned by an unfiltered listing
    pub transaction_list_limit: u64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            fiscal_year: 2026,
            otb_months: vec![
                FiscalMonth::Jan,
                FiscalMonth::Feb,
                FiscalMonth::Mar,
                FiscalMonth::Apr,
            ],
            transaction_list_limit: 100,
        }
    }
}

/// Fixture normalizer inputs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// Directory containing the flat JSON exports
    pub dir: PathBuf,
    /// Which file is reshaped into which model
    pub files: Vec<FixtureMapping>,
}

/// Maps one export file to the model name written into its fixture records
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FixtureMapping {
    /// File name relative to [`FixturesConfig::dir`]
    pub file: String,
    /// Model label written into every record (e.g., "api.storesmaster")
    pub model: String,
}

impl FixtureMapping {
    fn new(file: &str, model: &str) -> Self {
        Self {
            file: file.to_string(),
            model: model.to_string(),
        }
    }
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fixtures"),
            files: vec![
                FixtureMapping::new("synthetic_stores_master.json", "api.storesmaster"),
                FixtureMapping::new("synthetic_products_master.json", "api.productmaster"),
                FixtureMapping::new("synthetic_budget_otb.json", "api.budgetotb"),
                FixtureMapping::new("synthetic_sales_data.json", "api.transactionssales"),
            ],
        }
    }
}

impl AppConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Applies environment overrides on top of file values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        database_url: Option<String>,
        bind_address: Option<String>,
    ) -> Self {
        if let Some(url) = database_url {
            self.database.url = url;
        }
        if let Some(addr) = bind_address {
            self.server.bind_address = addr;
        }
        self
    }
}

/// Loads the application configuration from `path`, then applies environment overrides.
///
/// A missing file is not an error: defaults are used and a warning is logged.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or is not valid TOML.
pub fn load_app_configuration<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);

    let config = if path_ref.exists() {
        let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
            message: format!("Failed to read config file {}: {e}", path_ref.display()),
        })?;
        AppConfig::from_toml_str(&contents)?
    } else {
        warn!(
            "Config file {} not found, using defaults",
            path_ref.display()
        );
        AppConfig::default()
    };

    let config = config.with_overrides(
        std::env::var("DATABASE_URL").ok(),
        std::env::var("APEX_BIND_ADDRESS").ok(),
    );
    info!(
        bind_address = %config.server.bind_address,
        fiscal_year = config.planning.fiscal_year,
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [server]
            bind_address = "127.0.0.1:9000"

            [database]
            url = "sqlite::memory:"
            create_tables = false

            [planning]
            fiscal_year = 2027
            otb_months = ["MAY", "JUN"]
            transaction_list_limit = 25

            [fixtures]
            dir = "data/fixtures"

            [[fixtures.files]]
            file = "stores.json"
            model = "api.storesmaster"
        "#;

        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(!config.database.create_tables);
        assert_eq!(config.planning.fiscal_year, 2027);
        assert_eq!(
            config.planning.otb_months,
            vec![FiscalMonth::May, FiscalMonth::Jun]
        );
        assert_eq!(config.planning.transaction_list_limit, 25);
        assert_eq!(config.fixtures.dir, PathBuf::from("data/fixtures"));
        assert_eq!(
            config.fixtures.files,
            vec![FixtureMapping::new("stores.json", "api.storesmaster")]
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_toml_str("[planning]\nfiscal_year = 2025\n").unwrap();
        assert_eq!(config.planning.fiscal_year, 2025);
        assert_eq!(config.planning.otb_months.len(), 4);
        assert_eq!(config.planning.transaction_list_limit, 100);
        assert_eq!(config.server.bind_address, "0.0.0.0:8000");
        assert_eq!(config.fixtures.files.len(), 4);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let result = AppConfig::from_toml_str("[planning]\notb_months = [\"JANUARY\"]\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = AppConfig::default().with_overrides(
            Some("sqlite::memory:".to_string()),
            Some("127.0.0.1:1".to_string()),
        );
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.server.bind_address, "127.0.0.1:1");

        let untouched = AppConfig::default().with_overrides(None, None);
        assert_eq!(untouched.server.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_app_configuration(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.planning.fiscal_year, 2026);
    }
}
