//! # Session Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`SHOP_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filter used when neither `RUST_LOG` nor `SHOP_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,shop=debug";

/// Settings for one session run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// JSON catalog file. `None` uses the built-in bookshop.
    pub catalog_path: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` still wins.
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by the process environment.
    ///
    /// ## Environment Variables
    /// - `SHOP_CATALOG_PATH`: catalog JSON file
    /// - `SHOP_LOG_FILTER`: log filter directives
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SHOP_*` key.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = SessionConfig::default();

        if let Some(path) = lookup("SHOP_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("SHOP_LOG_FILTER").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, catalog_path: Option<PathBuf>, log_filter: Option<String>) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        self
    }
}
