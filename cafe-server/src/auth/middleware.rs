//! Session middleware
//!
//! Validates the owner session for dashboard routes and injects
//! [`CurrentOwner`] into request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{HeaderMap, Uri};

use crate::auth::{CurrentOwner, JwtError, JwtService, session};
use crate::core::ServerState;
use crate::security_log;
use shared::error::AppError;

/// Whether a path needs an owner session
///
/// `PUT /api/cafes/{id}` is also protected, through the [`CurrentOwner`]
/// extractor, because its GET twin is public.
pub fn is_protected_path(path: &str) -> bool {
    path == "/api/owner" || path.starts_with("/api/owner/") || path == "/api/auth/me"
}

/// Session middleware
///
/// Reads the token from the `session` cookie or `Authorization: Bearer`
/// and validates it for every protected path.
///
/// | Failure | Status |
/// |---------|--------|
/// | no token | 401 NotAuthenticated |
/// | expired token | 401 TokenExpired |
/// | any other bad token | 401 TokenInvalid |
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !is_protected_path(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let owner = authenticate(req.headers(), req.uri(), &state.get_jwt_service())?;
    req.extensions_mut().insert(owner);
    Ok(next.run(req).await)
}

/// Resolve the session owner from request headers
pub(crate) fn authenticate(
    headers: &HeaderMap,
    uri: &Uri,
    jwt_service: &JwtService,
) -> Result<CurrentOwner, AppError> {
    let Some(token) = session::token_from_headers(headers) else {
        security_log!("WARN", "auth_missing", uri = uri.to_string());
        return Err(AppError::not_authenticated());
    };

    let claims = jwt_service.validate_token(&token).map_err(|e| {
        security_log!(
            "WARN",
            "auth_failed",
            error = e.to_string(),
            uri = uri.to_string()
        );
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid session token"),
        }
    })?;

    CurrentOwner::try_from(claims).map_err(|e| {
        security_log!("WARN", "auth_malformed_claims", error = e.to_string());
        AppError::invalid_token("Malformed session claims")
    })
}
