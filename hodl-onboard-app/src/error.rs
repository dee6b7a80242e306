//! Application-layer errors

use std::path::PathBuf;

use thiserror::Error;

use hodl_onboard_core::ProvisioningError;

/// Errors raised while bootstrapping or touching local files.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is larger than {limit} bytes", path.display())]
    FileTooLarge { path: PathBuf, limit: u64 },

    /// `AppStateBuilder::build` was called without a required adapter
    #[error("{0} is required")]
    MissingAdapter(&'static str),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

impl From<AppError> for ProvisioningError {
    fn from(err: AppError) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

/// App layer Result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;
