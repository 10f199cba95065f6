//! Page Handlers

use axum::{Form, extract::State};
use maud::Markup;
use shared::models::ReservationRequest;

use crate::core::ServerState;
use crate::render;
use crate::reservation::ReservationForm;

pub async fn home(State(state): State<ServerState>) -> Markup {
    render::home::render(&state.catalog)
}

pub async fn menu(State(state): State<ServerState>) -> Markup {
    render::menu::render(&state.catalog)
}

pub async fn about(State(state): State<ServerState>) -> Markup {
    render::about::render(&state.catalog)
}

pub async fn contact(State(state): State<ServerState>) -> Markup {
    let form = ReservationForm::new();
    render::contact::render(&state.catalog, &form, None, render::today())
}

/// Run one full submission and re-render with the outcome
///
/// Waits out the submitter's delay before responding. A refused submit
/// (blank required field) re-renders the entered values with a notice.
pub async fn submit_reservation(
    State(state): State<ServerState>,
    Form(request): Form<ReservationRequest>,
) -> Markup {
    let mut form = ReservationForm::with_fields(request);
    let submitter = state.submitter();

    let notice = match form.submit_with(submitter.as_ref()).await {
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(code = %e.code, message = %e.message, "Reservation submit refused");
            Some(e.message)
        }
    };

    render::contact::render(
        &state.catalog,
        &form,
        notice.as_deref(),
        render::today(),
    )
}
