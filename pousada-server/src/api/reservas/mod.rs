//! Reservation API module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservas", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/rows", get(handler::rows))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/pdf", get(handler::voucher_pdf))
}
