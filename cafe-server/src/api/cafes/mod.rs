//! Café API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub(crate) use handler::validate_update;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cafes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/slots", get(handler::list_slots))
}
