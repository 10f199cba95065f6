//! Menu API Handlers

use axum::extract::{Path, State};
use shared::models::{Menu, MenuCategory, MenuItem};
use shared::{ApiResponse, AppResult};

use crate::core::ServerState;

pub async fn list(State(state): State<ServerState>) -> ApiResponse<Menu> {
    ApiResponse::success(state.catalog.menu().clone())
}

/// First three popular items, catalog order
pub async fn featured(State(state): State<ServerState>) -> ApiResponse<Vec<MenuItem>> {
    let items = state.catalog.featured_items().into_iter().cloned().collect();
    ApiResponse::success(items)
}

pub async fn category(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<MenuCategory>> {
    let category = state.catalog.category(&id)?;
    Ok(ApiResponse::success(category.clone()))
}

pub async fn item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<MenuItem>> {
    let item = state.catalog.item(&id)?;
    Ok(ApiResponse::success(item.clone()))
}
