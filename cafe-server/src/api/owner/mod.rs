//! Owner dashboard API module
//!
//! Every route here sits under `/api/owner`, which the global
//! `require_session` middleware protects.

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/owner", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/bookings", get(handler::list_bookings))
        .route(
            "/slots",
            get(handler::list_slots)
                .put(handler::set_slot_availability)
                .post(handler::create_slot),
        )
        .route("/cafe", patch(handler::update_cafe))
}
