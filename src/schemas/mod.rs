//! Schema types for motdesk
//!
//! Wire-compatible with the booking platform's JSON API.

mod booking;
mod config;
mod page;
mod reminder;
mod role;
mod vehicle;

pub use booking::{Booking, BookingStatus, DriverRef, GarageRef};
pub use config::Config;
pub use page::{BookingQuery, Page, VehicleQuery};
pub use reminder::{
    LeadTime, ReminderConfig, ReminderSettings, SendRemindersReceipt, SendRemindersRequest,
    DEFAULT_REMINDER_MESSAGE, LEAD_TIME_CHOICES,
};
pub use role::Role;
pub use vehicle::Vehicle;
