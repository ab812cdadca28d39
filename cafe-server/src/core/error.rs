use thiserror::Error;

/// Startup and serve errors
///
/// Request-level failures use [`shared::error::AppError`]; this type only
/// covers getting the process up and keeping the listener running.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<shared::error::AppError> for ServerError {
    fn from(err: shared::error::AppError) -> Self {
        ServerError::Database(err.message)
    }
}

impl From<crate::db::repository::RepoError> for ServerError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
