use crate::config::ConfigError;
use crate::dirs::DirectoryError;
use thiserror::Error;

/// Top-level error type for the dirconf library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("application context requires settings")]
    MissingConfig,

    #[error("installation root is not configured and cannot be derived from the executable path")]
    UnknownRoot,
}
