//! Role-keyed transition tables
//!
//! Every surface that offers status changes reads from here.

use serde::Serialize;

use crate::schemas::{Booking, BookingStatus, Role};

use super::states::{get_status_index, is_terminal_status};

type TransitionTable = &'static [(BookingStatus, &'static [BookingStatus])];

const GARAGE_TRANSITIONS: TransitionTable = &[
    (
        BookingStatus::Pending,
        &[BookingStatus::Accepted, BookingStatus::Rejected],
    ),
    (
        BookingStatus::Accepted,
        &[BookingStatus::Completed, BookingStatus::Cancelled],
    ),
];

// Admins may close a pending booking directly.
const ADMIN_TRANSITIONS: TransitionTable = &[
    (
        BookingStatus::Pending,
        &[
            BookingStatus::Accepted,
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ],
    ),
    (
        BookingStatus::Accepted,
        &[BookingStatus::Completed, BookingStatus::Cancelled],
    ),
];

const DRIVER_TRANSITIONS: TransitionTable = &[];

/// The transition table for a role, keyed by current status.
pub fn transition_table(role: Role) -> TransitionTable {
    match role {
        Role::Admin => ADMIN_TRANSITIONS,
        Role::Garage => GARAGE_TRANSITIONS,
        Role::Driver => DRIVER_TRANSITIONS,
    }
}

/// Returns the statuses `role` may move a booking to from `current`.
///
/// The result is in canonical status order and never contains `current`.
/// Terminal statuses always yield an empty list.
pub fn allowed_transitions(role: Role, current: BookingStatus) -> Vec<BookingStatus> {
    if is_terminal_status(current) {
        return vec![];
    }

    let mut allowed: Vec<BookingStatus> = transition_table(role)
        .iter()
        .find(|(from, _)| *from == current)
        .map(|(_, targets)| {
            targets
                .iter()
                .copied()
                .filter(|&target| target != current)
                .collect()
        })
        .unwrap_or_default();

    allowed.sort_by_key(|&s| get_status_index(s));
    allowed.dedup();
    allowed
}

/// A status change offered to the operator for one booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusAction {
    pub booking_id: String,
    pub target: BookingStatus,
    pub label: &'static str,
}

/// Actions to render for a booking. Empty once the booking is closed.
pub fn booking_actions(role: Role, booking: &Booking) -> Vec<StatusAction> {
    allowed_transitions(role, booking.status)
        .into_iter()
        .map(|target| StatusAction {
            booking_id: booking.id.clone(),
            target,
            label: target.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn make_booking(status: BookingStatus) -> Booking {
        Booking {
            id: "bk-1".to_string(),
            status,
            order_date: Utc::now(),
            total_amount: Decimal::new(5485, 2),
            driver: None,
            garage: None,
            vehicle_registration: None,
        }
    }

    #[test]
    fn test_garage_transitions() {
        assert_eq!(
            allowed_transitions(Role::Garage, BookingStatus::Pending),
            vec![BookingStatus::Accepted, BookingStatus::Rejected]
        );
        assert_eq!(
            allowed_transitions(Role::Garage, BookingStatus::Accepted),
            vec![BookingStatus::Completed, BookingStatus::Cancelled]
        );
    }

    #[test]
    fn test_admin_transitions() {
        assert_eq!(
            allowed_transitions(Role::Admin, BookingStatus::Pending),
            vec![
                BookingStatus::Accepted,
                BookingStatus::Rejected,
                BookingStatus::Completed,
                BookingStatus::Cancelled
            ]
        );
        assert_eq!(
            allowed_transitions(Role::Admin, BookingStatus::Accepted),
            vec![BookingStatus::Completed, BookingStatus::Cancelled]
        );
    }

    #[test]
    fn test_driver_has_no_transitions() {
        for &status in crate::domain::BOOKING_STATUSES {
            assert!(allowed_transitions(Role::Driver, status).is_empty());
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_transitions() {
        for role in [Role::Admin, Role::Garage, Role::Driver] {
            for status in [
                BookingStatus::Rejected,
                BookingStatus::Completed,
                BookingStatus::Cancelled,
            ] {
                assert!(allowed_transitions(role, status).is_empty());
            }
        }
    }

    #[test]
    fn test_booking_actions() {
        let actions = booking_actions(Role::Garage, &make_booking(BookingStatus::Pending));
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].target, BookingStatus::Accepted);
        assert_eq!(actions[0].label, "Accepted");
        assert_eq!(actions[1].booking_id, "bk-1");
    }

    #[test]
    fn test_booking_actions_closed_booking() {
        let actions = booking_actions(Role::Admin, &make_booking(BookingStatus::Completed));
        assert!(actions.is_empty());
    }
}
