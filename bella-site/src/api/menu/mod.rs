//! Menu API Module
//!
//! | Path | Method | Data |
//! |------|--------|------|
//! | /api/menu | GET | full menu |
//! | /api/menu/featured | GET | home page selection |
//! | /api/menu/categories/{id} | GET | one category |
//! | /api/menu/items/{id} | GET | one item |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/featured", get(handler::featured))
        .route("/categories/{id}", get(handler::category))
        .route("/items/{id}", get(handler::item))
}
