//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`cafes`] - public café listing, detail, slots and profile update
//! - [`bookings`] - public booking placement and lookup by email
//! - [`auth`] - owner login, logout and session introspection
//! - [`owner`] - owner dashboard (session required)

pub mod auth;
pub mod bookings;
pub mod cafes;
pub mod health;
pub mod owner;

pub use shared::error::{AppError, AppResult};
