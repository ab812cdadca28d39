//! Authentication Handlers
//!
//! Handles login, logout and session introspection

use axum::{Extension, Json, extract::State, http::header::SET_COOKIE, response::IntoResponse};
use shared::client::{
    CurrentOwnerResponse, LoginRequest, LoginResponse, OwnerInfo, SuccessResponse,
};
use shared::error::ErrorCode;

use crate::auth::password::verify_password;
use crate::auth::{CurrentOwner, session};
use crate::core::ServerState;
use crate::db::repository::{cafe, owner};
use crate::security_log;
use crate::utils::validation::{MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, require_text};
use crate::{AppError, AppResult};

/// Login handler
///
/// Verifies owner credentials, issues a session token and sets it as the
/// `session` cookie. The token is also returned in the body.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let username = require_text(req.username, "username", MAX_SHORT_TEXT_LEN)?;
    let password = req
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::required_field("password"))?;
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::invalid_credentials());
    }

    // Unified error message to prevent username enumeration
    let owner = match owner::find_by_username(state.pool(), &username).await? {
        Some(o) if verify_password(&password, &o.password_hash) => o,
        Some(_) => {
            security_log!("WARN", "login_failed", username = username.as_str(), reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }
        None => {
            security_log!("WARN", "login_failed", username = username.as_str(), reason = "unknown_user");
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(owner.id, owner.cafe_id, &owner.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    let cookie = session::session_cookie(
        &token,
        jwt_service.config.ttl_seconds(),
        state.config.is_production(),
    );

    tracing::info!(
        owner_id = owner.id,
        cafe_id = owner.cafe_id,
        username = %owner.username,
        "Owner logged in successfully"
    );

    let response = LoginResponse {
        success: true,
        owner: OwnerInfo {
            id: owner.id,
            cafe_id: owner.cafe_id,
            username: owner.username,
            email: owner.email,
        },
        token,
    };
    Ok(([(SET_COOKIE, cookie.to_string())], Json(response)))
}

/// Logout handler
///
/// Sessions are stateless, so logging out only expires the cookie.
pub async fn logout(State(state): State<ServerState>) -> impl IntoResponse {
    let cookie = session::clear_session_cookie(state.config.is_production());
    (
        [(SET_COOKIE, cookie.to_string())],
        Json(SuccessResponse::ok()),
    )
}

/// Get current owner info
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentOwner>,
) -> AppResult<Json<CurrentOwnerResponse>> {
    // The token may outlive the owner row
    let owner = owner::find_by_id(state.pool(), current.owner_id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::NotAuthenticated, "Owner no longer exists"))?;
    let cafe = cafe::find_by_id(state.pool(), owner.cafe_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CafeNotFound))?;

    Ok(Json(CurrentOwnerResponse {
        id: owner.id,
        username: owner.username,
        email: owner.email,
        cafe_id: cafe.id,
        cafe_name: cafe.name,
    }))
}
