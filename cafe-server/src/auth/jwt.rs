//! Session token service
//!
//! Issues and validates the HS256 tokens carried in the `session` cookie.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted secret length
pub const MIN_SECRET_LEN: usize = 32;

/// Default session lifetime (7 days)
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

/// Longest accepted session lifetime (1 year)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in hours, also the cookie Max-Age
    pub expiration_hours: i64,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// Load from `JWT_SECRET`, `SESSION_TTL_HOURS`, `JWT_ISSUER` and `JWT_AUDIENCE`
    ///
    /// In production a missing or short secret is an error. In development a
    /// missing secret is replaced by a random one for the lifetime of the process.
    pub fn from_env(is_production: bool) -> Result<Self, JwtError> {
        Ok(Self {
            secret: load_jwt_secret(is_production)?,
            expiration_hours: parse_ttl_hours(std::env::var("SESSION_TTL_HOURS").ok().as_deref()),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "cafe-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "cafe-owners".to_string()),
        })
    }

    /// Token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.expiration_hours.clamp(1, MAX_SESSION_TTL_HOURS) * 3600
    }
}

/// Parse `SESSION_TTL_HOURS`, falling back to the default outside `1..=MAX_SESSION_TTL_HOURS`
fn parse_ttl_hours(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_SESSION_TTL_HOURS;
    };
    match raw.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) => hours,
        _ => {
            tracing::warn!(
                value = raw,
                max = MAX_SESSION_TTL_HOURS,
                "Invalid SESSION_TTL_HOURS, using the default"
            );
            DEFAULT_SESSION_TTL_HOURS
        }
    }
}

/// Claims stored in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owner ID
    pub sub: String,
    /// Café the owner manages
    pub cafe_id: i64,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generate a printable random secret for development use
pub fn generate_secure_printable_jwt_secret() -> Result<String, JwtError> {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    rng.fill(&mut bytes)
        .map_err(|_| JwtError::ConfigError("Failed to generate secure random key".to_string()))?;

    Ok(bytes
        .iter()
        .map(|b| ALLOWED[*b as usize % ALLOWED.len()] as char)
        .collect())
}

fn load_jwt_secret(is_production: bool) -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= MIN_SECRET_LEN => Ok(secret),
        Ok(secret) => {
            if is_production {
                return Err(JwtError::ConfigError(format!(
                    "JWT_SECRET must be at least {MIN_SECRET_LEN} characters long"
                )));
            }
            tracing::warn!(
                "JWT_SECRET is only {} characters; accepted outside production",
                secret.len()
            );
            Ok(secret)
        }
        Err(_) => {
            if is_production {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production".to_string(),
                ));
            }
            tracing::warn!("JWT_SECRET not set, generating a temporary key for development");
            generate_secure_printable_jwt_secret()
        }
    }
}

/// Session token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("expiration_hours", &self.config.expiration_hours)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a session token for an owner
    pub fn generate_token(
        &self,
        owner_id: i64,
        cafe_id: i64,
        username: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.ttl_seconds());

        let claims = Claims {
            sub: owner_id.to_string(),
            cafe_id,
            username: username.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization: Bearer` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// Authenticated owner (parsed from session claims)
///
/// Inserted into request extensions by [`crate::auth::require_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentOwner {
    pub owner_id: i64,
    pub cafe_id: i64,
    pub username: String,
}

impl TryFrom<Claims> for CurrentOwner {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let owner_id = claims
            .sub
            .parse()
            .map_err(|_| JwtError::InvalidToken(format!("non-numeric subject: {}", claims.sub)))?;

        Ok(Self {
            owner_id,
            cafe_id: claims.cafe_id,
            username: claims.username,
        })
    }
}

impl CurrentOwner {
    /// Whether this owner manages the given café
    pub fn manages(&self, cafe_id: i64) -> bool {
        self.cafe_id == cafe_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-that-is-long-enough-for-hs256".into(),
            expiration_hours: 168,
            issuer: "cafe-server".into(),
            audience: "cafe-owners".into(),
        })
    }

    #[test]
    fn test_parse_ttl_hours() {
        assert_eq!(parse_ttl_hours(None), DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(parse_ttl_hours(Some("24")), 24);
        assert_eq!(parse_ttl_hours(Some(" 8760 ")), MAX_SESSION_TTL_HOURS);
        assert_eq!(parse_ttl_hours(Some("0")), DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(parse_ttl_hours(Some("-5")), DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(parse_ttl_hours(Some("8761")), DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(parse_ttl_hours(Some("9223372036854775807")), DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(parse_ttl_hours(Some("week")), DEFAULT_SESSION_TTL_HOURS);
    }

    #[test]
    fn test_oversized_ttl_is_clamped_when_issuing() {
        let service = JwtService::with_config(JwtConfig {
            expiration_hours: i64::MAX,
            ..test_service().config
        });
        assert_eq!(service.config.ttl_seconds(), MAX_SESSION_TTL_HOURS * 3600);

        let token = service.generate_token(7, 2, "cyberknights_owner").unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, MAX_SESSION_TTL_HOURS * 3600);
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = test_service();
        let token = service
            .generate_token(7, 2, "cyberknights_owner")
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.cafe_id, 2);
        assert_eq!(claims.username, "cyberknights_owner");
        assert_eq!(claims.exp - claims.iat, 168 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = test_service();
        let now = Utc::now().timestamp();
        // Well past the default 60s leeway
        let claims = Claims {
            sub: "1".into(),
            cafe_id: 1,
            username: "gamezone_owner".into(),
            exp: now - 3600,
            iat: now - 7200,
            iss: "cafe-server".into(),
            aud: "cafe-owners".into(),
        };
        let token = service.encode_claims(&claims).unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let token = test_service().generate_token(1, 1, "gamezone_owner").unwrap();
        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-secret-of-enough-length".into(),
            ..test_service().config
        });

        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            test_service().validate_token("not-a-token"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let service = test_service();
        let token = service.generate_token(1, 1, "gamezone_owner").unwrap();
        let other = JwtService::with_config(JwtConfig {
            audience: "someone-else".into(),
            ..service.config.clone()
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }

    #[test]
    fn test_current_owner_from_claims() {
        let service = test_service();
        let token = service.generate_token(3, 3, "pixelparadise_owner").unwrap();
        let owner = CurrentOwner::try_from(service.validate_token(&token).unwrap()).unwrap();

        assert_eq!(owner.owner_id, 3);
        assert!(owner.manages(3));
        assert!(!owner.manages(1));
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let claims = Claims {
            sub: "abc".into(),
            cafe_id: 1,
            username: "x".into(),
            exp: 0,
            iat: 0,
            iss: "cafe-server".into(),
            aud: "cafe-owners".into(),
        };
        assert!(CurrentOwner::try_from(claims).is_err());
    }

    #[test]
    fn test_printable_secret() {
        let a = generate_secure_printable_jwt_secret().unwrap();
        let b = generate_secure_printable_jwt_secret().unwrap();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert!(a.is_ascii());
    }
}
