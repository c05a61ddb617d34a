//! # shop-session
//!
//! Runs a scripted cart session against a catalog and prints the resulting
//! cart summary.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse CLI flags (clap)                                              │
//! │  2. Build SessionConfig: defaults ◄ SHOP_* env ◄ CLI flags              │
//! │  3. Initialize logging (tracing-subscriber, RUST_LOG wins)              │
//! │  4. Load inventory: catalog file, or built-in bookshop                  │
//! │  5. Replay operations on a fresh cart                                   │
//! │  6. Print CartSummary as JSON on stdout                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog_file;
pub mod config;
pub mod error;
pub mod session;

use std::path::PathBuf;

use clap::Parser;
use shop_core::{CartSummary, SharedInventory};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::SessionConfig;
pub use error::{AppError, AppResult};
pub use session::Operation;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "shop-session", version, about = "Replay add/remove operations on a shopping cart")]
pub struct Cli {
    /// JSON catalog file (overrides SHOP_CATALOG_PATH).
    #[arg(long, short = 'c')]
    pub catalog: Option<PathBuf>,

    /// Log filter directives (overrides SHOP_LOG_FILTER).
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Operations to apply in order: add:<id> or remove:<id>.
    #[arg(value_parser = parse_operation)]
    pub operations: Vec<Operation>,
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    s.parse().map_err(|err: AppError| err.to_string())
}

impl Cli {
    /// Resolves the effective configuration for this invocation.
    pub fn config(&self) -> SessionConfig {
        SessionConfig::from_env().with_overrides(self.catalog.clone(), self.log_filter.clone())
    }
}

/// Installs the global tracing subscriber. Logs go to stderr so stdout stays
/// machine-readable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=shop_core=trace` - Trace the domain crate only
/// - Default: the configured filter
pub fn init_tracing(config: &SessionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configured inventory and replays `operations` on a new cart.
pub fn run(config: &SessionConfig, operations: &[Operation]) -> AppResult<CartSummary> {
    let inventory = match &config.catalog_path {
        Some(path) => catalog_file::load_inventory(path)?,
        None => {
            info!("no catalog file configured, using built-in bookshop");
            catalog_file::bookshop_inventory()?
        }
    };

    session::replay(SharedInventory::new(inventory), operations)
}
