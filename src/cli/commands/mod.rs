//! CLI command implementations

pub mod bookings;
pub mod reminders;
pub mod transitions;
