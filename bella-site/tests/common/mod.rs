#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use bella_site::api::build_app;
use bella_site::{Catalog, Config, ReservationSubmitter, ServerState, SimulatedSubmitter};
use serde_json::Value;
use shared::models::ReservationRequest;
use shared::{AppError, AppResult};
use tokio::sync::Semaphore;
use tower::ServiceExt;

pub fn state_with(submitter: Arc<dyn ReservationSubmitter>) -> ServerState {
    ServerState::new(
        Config::for_tests(),
        Catalog::bundled().expect("bundled content"),
        submitter,
    )
}

/// App with an instant, always-successful submitter
pub fn app() -> Router {
    build_app(state_with(Arc::new(SimulatedSubmitter::new(Duration::ZERO))))
}

/// Backend that is always down
pub struct FailingSubmitter;

#[async_trait]
impl ReservationSubmitter for FailingSubmitter {
    async fn submit(&self, _request: &ReservationRequest) -> AppResult<()> {
        Err(AppError::internal("reservation backend unavailable"))
    }
}

/// Succeeds only once the test releases the gate
pub struct GatedSubmitter {
    pub gate: Arc<Semaphore>,
}

impl GatedSubmitter {
    pub fn new() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        (Self { gate: gate.clone() }, gate)
    }
}

#[async_trait]
impl ReservationSubmitter for GatedSubmitter {
    async fn submit(&self, _request: &ReservationRequest) -> AppResult<()> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| AppError::internal("gate closed"))?;
        permit.forget();
        Ok(())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).expect("json"))
}

pub async fn json_request(
    app: &Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).expect("json"))
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("request");
    send(app, request).await
}
