use thiserror::Error;

use super::config::ConfigError;

/// Fatal server-level errors (startup / bind). Request-time failures are
/// handled by [`crate::utils::AppError`] and the content degradation
/// path; nothing on the page path reaches this type.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
