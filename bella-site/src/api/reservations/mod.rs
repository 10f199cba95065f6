//! Reservation API Module
//!
//! | Path | Method | Behaviour |
//! |------|--------|-----------|
//! | /api/reservations/options | GET | guest options, time slots, earliest date |
//! | /api/reservations/forms | POST | open a form (201) |
//! | /api/reservations/forms/{id} | GET | form snapshot |
//! | /api/reservations/forms/{id} | PATCH | edit fields, status unchanged |
//! | /api/reservations/forms/{id}/submit | POST | start submission (202), 409 while in flight |
//!
//! Poll the form snapshot to observe `submitting` settle into `success` or `error`.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/options", get(handler::options))
        .route("/forms", post(handler::create))
        .route("/forms/{id}", get(handler::get).patch(handler::update))
        .route("/forms/{id}/submit", post(handler::submit))
}
