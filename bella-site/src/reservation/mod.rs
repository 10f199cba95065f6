//! Reservation form controller
//!
//! - [`form`] - the idle / submitting / success / error state machine
//! - [`submitter`] - where submitted requests go
//! - [`registry`] - UUID-addressed form sessions for the JSON API

pub mod form;
pub mod registry;
pub mod submitter;

pub use form::{FormEvent, ReservationForm, Transition, check_submittable};
pub use registry::{DEFAULT_FORM_CAPACITY, FormRegistry};
pub use submitter::{ReservationSubmitter, SimulatedSubmitter};
