use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

use crate::algorithms::overrides::OverrideTable;
use crate::error::{CatalogError, ConfigError};
use crate::models::Catalog;
use crate::utils::load_catalog::load_catalog;
use crate::PairedRouteSolver;

pub const ADDR_KEY: &str = "DELIVERY_QUOTE_ADDR";
pub const CATALOG_KEY: &str = "DELIVERY_QUOTE_CATALOG";
pub const LEGACY_OVERRIDES_KEY: &str = "DELIVERY_QUOTE_LEGACY_OVERRIDES";
pub const LOG_LEVEL_KEY: &str = "DELIVERY_QUOTE_LOG_LEVEL";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Service settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,

    /// Catalog file, the standard catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Apply the legacy override table after route pricing
    pub legacy_overrides: bool,

    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, treating blank values as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let addr = get(ADDR_KEY).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listen_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddress {
                value: addr.clone(),
                source,
            })?;

        let legacy_overrides = match get(LEGACY_OVERRIDES_KEY) {
            None => false,
            Some(value) => parse_flag(LEGACY_OVERRIDES_KEY, &value)?,
        };

        let log_level = match get(LOG_LEVEL_KEY) {
            None => Level::INFO,
            Some(value) => value
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(value))?,
        };

        Ok(Self {
            listen_addr,
            catalog_path: get(CATALOG_KEY).map(PathBuf::from),
            legacy_overrides,
            log_level,
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::standard()),
        }
    }

    /// Builds the solver described by this configuration
    pub fn build_solver(&self) -> Result<PairedRouteSolver, CatalogError> {
        let solver = PairedRouteSolver::new(Arc::new(self.load_catalog()?));
        Ok(if self.legacy_overrides {
            solver.with_overrides(OverrideTable::legacy())
        } else {
            solver
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            catalog_path: None,
            legacy_overrides: false,
            log_level: Level::INFO,
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = config_from(&[
            (ADDR_KEY, "0.0.0.0:9000"),
            (CATALOG_KEY, "data/catalog.json"),
            (LEGACY_OVERRIDES_KEY, "TRUE"),
            (LOG_LEVEL_KEY, "debug"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr, SocketAddr::from(([0, 0, 0, 0], 9000)));
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
        assert!(config.legacy_overrides);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[(CATALOG_KEY, "  "), (LEGACY_OVERRIDES_KEY, "")]).unwrap();
        assert_eq!(config.catalog_path, None);
        assert!(!config.legacy_overrides);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[(ADDR_KEY, "localhost")]),
            Err(ConfigError::InvalidAddress { .. })
        ));
        assert!(matches!(
            config_from(&[(LEGACY_OVERRIDES_KEY, "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert!(matches!(
            config_from(&[(LOG_LEVEL_KEY, "loud")]),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_build_solver() {
        let solver = AppConfig::default().build_solver().unwrap();
        assert!(!solver.overrides_enabled());

        let config = AppConfig {
            legacy_overrides: true,
            ..AppConfig::default()
        };
        assert!(config.build_solver().unwrap().overrides_enabled());
    }
}
