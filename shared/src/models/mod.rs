//! Data models
//!
//! Shared between cafe-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod booking;
pub mod cafe;
pub mod game;
pub mod owner;
pub mod serde_helpers;
pub mod slot;

// Re-exports
pub use booking::*;
pub use cafe::*;
pub use game::*;
pub use owner::*;
pub use slot::*;
