//! Domain logic for booking statuses and MOT reminder eligibility

mod eligibility;
mod states;
mod transitions;
mod validation;


pub use eligibility::{
    classify_expiry, compute_reminder_eligibility, compute_reminder_eligibility_today,
    days_until_expiry, ExpiryClass, ReminderEligibility,
};
pub use states::{
    get_status_index, is_terminal_status, parse_status, BOOKING_STATUSES, TERMINAL_STATUSES,
};
pub use transitions::{allowed_transitions, booking_actions, transition_table, StatusAction};
pub use validation::{validate_status_change, validate_transition, ValidationResult};
