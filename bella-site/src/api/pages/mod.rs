//! HTML pages
//!
//! | Path | Method | Page |
//! |------|--------|------|
//! | / | GET | home |
//! | /menu | GET | menu |
//! | /about | GET | about |
//! | /contact | GET | contact with a fresh reservation form |
//! | /contact | POST | submit the reservation form and re-render |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/menu", get(handler::menu))
        .route("/about", get(handler::about))
        .route("/contact", get(handler::contact).post(handler::submit_reservation))
}
