//! Site content and reservation models
//!
//! Content types mirror the bundled JSON documents one to one.

pub mod about;
pub mod contact;
pub mod menu;
pub mod reservation;

pub use about::{AboutContent, CoreValue, Section, TeamMember};
pub use contact::{Address, ContactDocument, ContactInfo, OrderedPairs, Restaurant};
pub use menu::{FEATURED_LIMIT, Menu, MenuCategory, MenuItem};
pub use reservation::{
    GuestOption, ReservationField, ReservationFormSnapshot, ReservationOptions,
    ReservationRequest, ReservationUpdate, SubmissionStatus, TimeSlot, guest_options, time_slots,
};
