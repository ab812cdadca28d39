//! Repository Module
//!
//! Free async functions over `&SqlitePool`, one module per table.

pub mod booking;
pub mod cafe;
pub mod game;
pub mod owner;
pub mod slot;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                RepoError::Validation(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                AppError::database("Database error")
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use shared::models::{Cafe, CafeCreate};
    use sqlx::SqlitePool;

    /// Fresh migrated in-memory database
    pub async fn memory_pool() -> SqlitePool {
        DbService::new("sqlite::memory:").await.unwrap().pool
    }

    pub fn sample_cafe(name: &str) -> CafeCreate {
        CafeCreate {
            name: name.into(),
            address: "MG Road, Bangalore".into(),
            description: Some("Premium gaming cafe".into()),
            num_pcs: 25,
            gpu_specs: "RTX 4080".into(),
            cpu_specs: Some("Intel i9-13900K".into()),
            ram_specs: None,
            photo_url: None,
        }
    }

    /// Insert a café with the given PC count
    pub async fn insert_cafe(pool: &SqlitePool, name: &str, num_pcs: i64) -> Cafe {
        super::cafe::create(
            pool,
            CafeCreate {
                num_pcs,
                ..sample_cafe(name)
            },
        )
        .await
        .unwrap()
    }
}
