use axum::extract::State;
use shared::ApiResponse;
use shared::models::{AboutContent, ContactDocument};

use crate::core::ServerState;

pub async fn contact(State(state): State<ServerState>) -> ApiResponse<ContactDocument> {
    ApiResponse::success(state.catalog.contact_document().clone())
}

pub async fn about(State(state): State<ServerState>) -> ApiResponse<AboutContent> {
    ApiResponse::success(state.catalog.about().clone())
}
