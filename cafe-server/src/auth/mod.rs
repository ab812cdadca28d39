//! Owner authentication
//!
//! - [`JwtService`] - session token issuing and validation
//! - [`CurrentOwner`] - authenticated owner context
//! - [`require_session`] - session middleware for dashboard routes
//! - [`session`] - `session` cookie helpers
//! - [`password`] - Argon2 hashing
//! - [`RateLimiter`] - per-IP login throttling

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod rate_limit;
pub mod session;

pub use jwt::{Claims, CurrentOwner, JwtConfig, JwtError, JwtService};
pub use middleware::require_session;
pub use rate_limit::{RateLimiter, login_rate_limit};
