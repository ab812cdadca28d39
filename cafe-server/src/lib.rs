//! Gaming café booking server
//!
//! # Overview
//!
//! - **Public API** (`api::cafes`, `api::bookings`): café listing, live slot
//!   availability and PC bookings
//! - **Owner dashboard** (`api::owner`): bookings, slots and profile of the
//!   owner's café behind a session cookie
//! - **Database** (`db`): SQLite through `sqlx`, with an optional demo seed
//! - **Auth** (`auth`): JWT sessions, Argon2 passwords, login rate limiting
//!
//! # Layout
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, session cookie, middleware
//! ├── api/           # HTTP handlers
//! ├── routes/        # router assembly
//! ├── db/            # pool, migrations, repositories, seed
//! └── utils/         # logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

pub use auth::{CurrentOwner, JwtService};
pub use core::{Config, Server, ServerState};
pub use routes::build_app;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   ______       ____
  / ____/___ _ / __/__
 / /   / __ `// /_/ _ \
/ /___/ /_/ // __/  __/
\____/\__,_//_/  \___/   booking server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
