//! Booking status definitions
//!
//! PENDING → ACCEPTED → COMPLETED | CANCELLED, or PENDING → REJECTED.

use crate::errors::{MotdeskError, Result};
use crate::schemas::BookingStatus;

/// The canonical ordering of booking statuses.
///
/// Every list of statuses handed out by this crate follows this order.
pub const BOOKING_STATUSES: &[BookingStatus] = &[
    BookingStatus::Pending,
    BookingStatus::Accepted,
    BookingStatus::Rejected,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

/// Statuses no booking ever leaves.
pub const TERMINAL_STATUSES: &[BookingStatus] = &[
    BookingStatus::Rejected,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

/// Get the 0-based index of a status in [`BOOKING_STATUSES`].
pub fn get_status_index(status: BookingStatus) -> usize {
    BOOKING_STATUSES
        .iter()
        .position(|&s| s == status)
        .unwrap_or(usize::MAX)
}

/// Check if a status is terminal (rejected, completed or cancelled).
pub fn is_terminal_status(status: BookingStatus) -> bool {
    TERMINAL_STATUSES.contains(&status)
}

/// Normalise a raw status string and check it belongs to the fixed set.
///
/// # Errors
/// * `Validation` - If the value is not one of the five booking statuses
pub fn parse_status(raw: &str) -> Result<BookingStatus> {
    raw.parse::<BookingStatus>()
        .map_err(MotdeskError::Validation)
}
