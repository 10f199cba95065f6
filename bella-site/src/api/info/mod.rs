//! Restaurant info API Module
//!
//! | Path | Method | Data |
//! |------|--------|------|
//! | /api/contact | GET | restaurant, contact details, hours, social links |
//! | /api/about | GET | story, mission, values, team |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/contact", get(handler::contact))
        .route("/api/about", get(handler::about))
}
