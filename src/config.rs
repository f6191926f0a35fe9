//! TOML configuration for the `vend` binary and embedders.
//!
//! ```toml
//! log_filter = "mealy_vend=debug"
//! history_limit = 100
//!
//! [[products]]
//! code = "A1"
//! name = "Agua Ciel"
//! price = 12
//! stock = 10
//! ```
//!
//! With no `[[products]]` the standard catalog is used.

use crate::builder::{BuildError, CatalogBuilder, ProductEntry};
use crate::catalog::Catalog;
use crate::core::TransitionLog;
use crate::logging::{LoggerConfig, DEFAULT_FILTER};
use crate::machine::VendingMachine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Catalog(#[from] BuildError),
}

/// Machine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Keep only this many transition records; unbounded when absent
    pub history_limit: Option<usize>,

    /// Custom catalog; empty means the standard one
    pub products: Vec<ProductEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            history_limit: None,
            products: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The catalog this config describes, validated.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.products.is_empty() {
            return Ok(Catalog::standard());
        }

        let catalog = CatalogBuilder::new()
            .entries(self.products.iter().cloned())
            .build()?;
        info!(products = catalog.len(), "loaded custom catalog");
        Ok(catalog)
    }

    /// Transition log sized by `history_limit`.
    pub fn log(&self) -> TransitionLog {
        match self.history_limit {
            Some(limit) => TransitionLog::with_capacity(limit),
            None => TransitionLog::new(),
        }
    }

    /// A fresh machine in `Idle` over this config's catalog.
    pub fn machine(&self) -> Result<VendingMachine, ConfigError> {
        Ok(VendingMachine::with_log(self.catalog()?, self.log()))
    }

    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig::new(self.log_filter.as_str())
    }
}
