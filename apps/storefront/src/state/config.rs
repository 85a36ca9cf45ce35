//! # Application Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (--data-dir)          (highest priority)        │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STOREFRONT_CATALOG_URL=https://fakestoreapi.com                    │
//! │     STOREFRONT_DATA_DIR=/tmp/storefront                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/storefront/config.toml (Linux)                           │
//! │     ~/Library/Application Support/dev.storefront.storefront/ (macOS)   │
//! │                                                                         │
//! │  4. Default Values                                  (lowest priority)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "https://fakestoreapi.com"
//! timeout_secs = 10
//! # offline_file = "/path/to/products.json"
//!
//! [storage]
//! data_dir = "/home/ana/.local/share/storefront"
//!
//! [logging]
//! filter = "info,storefront=debug"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use storefront_catalog::CatalogSettings;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default tracing filter when neither RUST_LOG nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// Configuration errors. All of them stop startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine a data directory; pass --data-dir")]
    NoDataDir,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(flatten)]
    pub settings: CatalogSettings,

    /// Serve products from this feed dump instead of the network.
    pub offline_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where `storage.json` lives. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = &self.catalog.settings.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "catalog.base_url must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.catalog.settings.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "catalog.timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STOREFRONT_*` overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("STOREFRONT_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.settings.base_url = url;
        }

        if let Some(timeout) = lookup("STOREFRONT_CATALOG_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.catalog.settings.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric catalog timeout"),
            }
        }

        if let Some(file) = lookup("STOREFRONT_CATALOG_FILE") {
            self.catalog.offline_file = Some(PathBuf::from(file));
        }

        if let Some(dir) = lookup("STOREFRONT_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            self.logging.filter = filter;
        }
    }

    /// The configured data dir, or the platform default.
    pub fn data_dir(&self) -> ConfigResult<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or(ConfigError::NoDataDir),
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("dev", "storefront", "storefront")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.settings.base_url, "https://fakestoreapi.com");
        assert_eq!(config.catalog.settings.timeout_secs, 10);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.catalog.settings.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.catalog.settings.base_url = "http://localhost:3000".to_string();
        assert!(config.validate().is_ok());

        config.catalog.settings.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_file() {
        let text = r#"
            [catalog]
            base_url = "http://localhost:9000"
            offline_file = "/tmp/products.json"

            [storage]
            data_dir = "/tmp/sf"
        "#;
        let config: AppConfig = toml::from_str(text).unwrap();

        assert_eq!(config.catalog.settings.base_url, "http://localhost:9000");
        assert_eq!(config.catalog.settings.timeout_secs, 10);
        assert_eq!(
            config.catalog.offline_file,
            Some(PathBuf::from("/tmp/products.json"))
        );
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/sf"));
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("STOREFRONT_CATALOG_URL", "http://mirror.test"),
            ("STOREFRONT_CATALOG_TIMEOUT", "not-a-number"),
            ("STOREFRONT_DATA_DIR", "/var/sf"),
            ("STOREFRONT_LOG", "warn"),
        ]);

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog.settings.base_url, "http://mirror.test");
        assert_eq!(config.catalog.settings.timeout_secs, 10);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/var/sf")));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\ntimeout_secs = 3\n").unwrap();

        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.catalog.settings.timeout_secs, 3);
    }
}
