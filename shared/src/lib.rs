//! Shared types for the gaming café booking service
//!
//! Domain models, client DTOs and the unified error system used by
//! `cafe-server` and its API clients.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
