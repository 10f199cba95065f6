//! Startup and server lifecycle errors
//!
//! Request-level failures use [`shared::AppError`]; this type covers what can go
//! wrong before or while the listener runs.

use shared::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("content error: {0}")]
    Content(#[from] AppError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
