//! Core - configuration, state, server and startup errors
//!
//! - [`Config`] - environment-driven settings
//! - [`ServerState`] - shared handler state
//! - [`Server`] - HTTP listener
//! - [`ServerError`] - startup and lifecycle errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
