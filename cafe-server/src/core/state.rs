use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::auth::{JwtService, RateLimiter};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::seed;

/// Shared server state
///
/// Cheap to clone: every field is a handle.
#[derive(Clone)]
pub struct ServerState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// SQLite pool owner
    pub db: DbService,
    /// Session token service
    pub jwt_service: Arc<JwtService>,
    /// Per-IP login attempt limiter
    pub rate_limiter: RateLimiter,
}

impl ServerState {
    /// Open the database, apply migrations and seed demo data if asked to
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url).await?;

        if config.seed_demo_data {
            let seeded = seed::seed_demo_data(&db.pool).await?;
            if seeded {
                tracing::info!("Demo data seeded");
            }
        }

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            rate_limiter: RateLimiter::new(),
        })
    }

    /// Start background maintenance tasks
    ///
    /// Currently only prunes the login rate limiter every five minutes.
    pub fn start_background_tasks(&self) {
        let rate_limiter = self.rate_limiter.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));
            loop {
                interval.tick().await;
                rate_limiter.cleanup().await;
            }
        });
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
