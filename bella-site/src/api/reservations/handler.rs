//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{
    ReservationFormSnapshot, ReservationOptions, ReservationUpdate, guest_options, time_slots,
};
use shared::{ApiResponse, AppResult};
use uuid::Uuid;

use crate::core::ServerState;
use crate::render;

/// Selector contents for clients that render their own form
pub async fn options() -> ApiResponse<ReservationOptions> {
    ApiResponse::success(ReservationOptions {
        guests: guest_options(),
        times: time_slots(),
        min_date: render::today().format("%Y-%m-%d").to_string(),
    })
}

pub async fn create(
    State(state): State<ServerState>,
) -> AppResult<(StatusCode, ApiResponse<ReservationFormSnapshot>)> {
    let snapshot = state.forms.create()?;
    Ok((StatusCode::CREATED, ApiResponse::success(snapshot)))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<ReservationFormSnapshot>> {
    Ok(ApiResponse::success(state.forms.snapshot(id)?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<ApiResponse<ReservationFormSnapshot>> {
    Ok(ApiResponse::success(state.forms.edit(id, payload)?))
}

/// Start a submission; the form settles in the background
pub async fn submit(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, ApiResponse<ReservationFormSnapshot>)> {
    let (snapshot, _task) = state.forms.submit(id)?;
    Ok((
        StatusCode::ACCEPTED,
        ApiResponse::success_with_message("Submitting", snapshot),
    ))
}
