//! Session extractor
//!
//! Lets a handler on an otherwise public route demand an owner session.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::CurrentOwner;
use crate::auth::middleware::authenticate;
use crate::core::ServerState;
use shared::error::AppError;

impl FromRequestParts<ServerState> for CurrentOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by the middleware
        if let Some(owner) = parts.extensions.get::<CurrentOwner>() {
            return Ok(owner.clone());
        }

        let owner = authenticate(&parts.headers, &parts.uri, &state.get_jwt_service())?;
        parts.extensions.insert(owner.clone());
        Ok(owner)
    }
}
