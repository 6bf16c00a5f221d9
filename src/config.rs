//! Configuration management for the book catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::services::catalog::IdPolicy;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file the catalog is loaded from and saved to
    pub path: PathBuf,
    /// How identifiers stored in the file are treated on load
    pub id_policy: IdPolicy,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Load configuration using `dir` as the location of the layered config files
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Add environment variables (CATALOG_LOGGING__LEVEL=debug)
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the catalog file from CATALOG_FILE if present
            .set_override_option("catalog.path", env::var("CATALOG_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("library.json"),
            id_policy: IdPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
