//! Bella Vista Cafe - restaurant marketing site
//!
//! # Overview
//!
//! - **Content catalog** (`content`): menu, contact and about documents, loaded once
//! - **Reservation controller** (`reservation`): idle → submitting → success | error
//! - **Pages** (`render`): server-rendered HTML
//! - **HTTP** (`api`): pages plus a JSON API over the catalog and form sessions
//!
//! # Layout
//!
//! ```text
//! bella-site/src/
//! ├── core/          # config, state, server, errors
//! ├── content/       # catalog loading and queries
//! ├── reservation/   # form state machine, submitter, form sessions
//! ├── render/        # HTML builder and pages
//! ├── api/           # axum routes and handlers
//! └── utils/         # logging
//! ```

pub mod api;
pub mod content;
pub mod core;
pub mod render;
pub mod reservation;
pub mod utils;

pub use content::Catalog;
pub use core::{Config, Server, ServerError, ServerState};
pub use reservation::{
    FormRegistry, ReservationForm, ReservationSubmitter, SimulatedSubmitter, Transition,
};

pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Reservation lifecycle log - routed to `reservations/` when file logging is on
///
/// # Examples
/// ```ignore
/// reservation_log!("succeeded");
/// reservation_log!("submitting", guests = "4", date = "2025-05-01");
/// ```
#[macro_export]
macro_rules! reservation_log {
    ($event:expr) => {
        tracing::info!(target: "reservation", event = $event)
    };
    ($event:expr, $($arg:tt)*) => {
        tracing::info!(target: "reservation", event = $event, $($arg)*)
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____       ____         _    ___      __
   / __ )___  / / /___ _   | |  / (_)____/ /_____ _
  / __  / _ \/ / / __ `/   | | / / / ___/ __/ __ `/
 / /_/ /  __/ / / /_/ /    | |/ / (__  ) /_/ /_/ /
/_____/\___/_/_/\__,_/     |___/_/____/\__/\__,_/
    "#
    );
}
