//! Application error types.

use thiserror::Error;

use crate::api::ApiError;
use crate::loader::LoadError;
use crate::map::MapError;

/// Errors that can occur during application lifecycle.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(ApiError),

    /// Loading layers from the API failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A map operation was rejected.
    #[error(transparent)]
    Map(#[from] MapError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
