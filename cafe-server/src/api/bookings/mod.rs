//! Booking API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/bookings",
        get(handler::find_by_email).post(handler::create),
    )
}
