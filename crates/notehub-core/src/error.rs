//! Error types for notehub-core

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::models::DraftErrors;

/// Result type alias using notehub-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notehub-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote notes gateway error
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Note draft failed validation
    #[error("Invalid note: {0}")]
    InvalidNote(#[from] DraftErrors),
}
