//! HTTP routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`pages`] - HTML pages, including the posted reservation form
//! - [`menu`] - menu JSON
//! - [`info`] - contact and about JSON
//! - [`reservations`] - reservation form sessions

pub mod health;
pub mod info;
pub mod menu;
pub mod pages;
pub mod reservations;

use axum::Router;
use http::{HeaderName, HeaderValue};
use shared::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(pages::router())
        .merge(menu::router())
        .merge(info::router())
        .merge(reservations::router())
        .fallback(not_found)
}

/// Fully configured application: routes, middleware and state
///
/// Used by the server and by the router tests.
pub fn build_app(state: ServerState) -> Router {
    let timeout = state.config.request_timeout();

    build_router()
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

async fn not_found(uri: http::Uri) -> AppError {
    AppError::not_found(uri.path())
}
