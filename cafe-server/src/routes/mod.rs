//! Router assembly
//!
//! [`build_app`] is used by both the HTTP server and the integration tests.

use axum::Router;
use axum::middleware as axum_middleware;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::auth::require_session;
use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(api::health::router())
        // Café API - public, except PUT which checks the session itself
        .merge(api::cafes::router())
        // Booking API - public route
        .merge(api::bookings::router())
        // Auth API - login is rate limited, /me needs a session
        .merge(api::auth::router(state))
        // Owner dashboard - session required
        .merge(api::owner::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router(state)
        // Session check - injects CurrentOwner for protected paths
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
        // CORS - the frontend origin, with cookies
        .layer(cors_layer(&state.config.cors_origin))
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    match HeaderValue::from_str(origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(origin, "Invalid CORS_ORIGIN, cross-origin requests disabled");
            layer
        }
    }
}
