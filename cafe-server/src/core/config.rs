use crate::auth::JwtConfig;
use crate::core::ServerError;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:gaming-cafes.db | SQLite URL (`sqlite::memory:` for a throwaway store) |
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | ENVIRONMENT | development | development \| production |
/// | JWT_SECRET | generated in development | HS256 signing secret, at least 32 chars |
/// | SESSION_TTL_HOURS | 168 | session lifetime |
/// | CORS_ORIGIN | http://localhost:3000 | frontend origin allowed with credentials |
/// | SEED_DEMO_DATA | true | seed demo cafés into an empty database |
/// | LOG_LEVEL | info | default log level |
/// | LOG_DIR | unset | directory for daily rolling log files |
/// | TRUST_PROXY | false | key the login limiter on `X-Forwarded-For` (only behind a proxy that sets it) |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite::memory: HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// development | production
    pub environment: String,
    /// Session token settings
    pub jwt: JwtConfig,
    /// Allowed frontend origin
    pub cors_origin: String,
    /// Seed demo data into an empty database on startup
    pub seed_demo_data: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Take the client IP from `X-Forwarded-For` instead of the socket peer
    pub trust_proxy: bool,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables fall back to their defaults. Fails only when the
    /// session secret is unusable in production.
    pub fn from_env() -> Result<Self, ServerError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        let jwt = JwtConfig::from_env(is_production)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:gaming-cafes.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment,
            jwt,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            trust_proxy: std::env::var("TRUST_PROXY")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }

    /// Override the database and port, keeping everything else from the environment
    ///
    /// Mostly used by tests.
    pub fn with_overrides(
        database_url: impl Into<String>,
        http_port: u16,
    ) -> Result<Self, ServerError> {
        let mut config = Self::from_env()?;
        config.database_url = database_url.into();
        config.http_port = http_port;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Parse a boolean flag the way shells usually spell them
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("sqlite::memory:", 0).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http_port, 0);
        assert!(!config.jwt.secret.is_empty());
    }

    #[test]
    fn test_environment_helpers() {
        let mut config = Config::with_overrides("sqlite::memory:", 0).unwrap();
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
