//! # App Error Type
//!
//! Everything that can stop a session run.
//!
//! ```text
//! ValidationError ─► CoreError ─┐
//!                               ├─► AppError ─► main() exit status
//! std::io / serde_json ─────────┘
//! ```

use std::path::PathBuf;

use shop_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file or output JSON is malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Domain rule violation from shop-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An operation argument did not parse, e.g. `add:abc`.
    #[error("Invalid operation '{0}': expected add:<id> or remove:<id>")]
    InvalidOperation(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
