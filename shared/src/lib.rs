//! Shared types for the Bella Vista site
//!
//! Content models (menu, contact, about), the reservation form model and the
//! unified error system used by the site service and its JSON API.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
