//! Validation rules for booking status changes

use crate::errors::{MotdeskError, Result};
use crate::schemas::{BookingStatus, Role};

use super::states::is_terminal_status;
use super::transitions::allowed_transitions;

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Turn a failed check into a transition error
    pub fn into_result(self) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        Err(MotdeskError::Transition(
            self.reason
                .unwrap_or_else(|| "Transition validation failed".to_string()),
        ))
    }
}

/// Check whether `role` may move a booking from `current` to `target`.
pub fn validate_transition(role: Role, current: BookingStatus, target: BookingStatus) -> ValidationResult {
    if current == target {
        return ValidationResult::failure(format!("booking is already {}", current));
    }

    if is_terminal_status(current) {
        return ValidationResult::failure(format!(
            "cannot transition from terminal status {}",
            current
        ));
    }

    if !allowed_transitions(role, current).contains(&target) {
        return ValidationResult::failure(format!(
            "{} cannot transition a booking from {} to {}",
            role, current, target
        ));
    }

    ValidationResult::success()
}

/// [`validate_transition`] as a `Result`, for use with `?`.
pub fn validate_status_change(role: Role, current: BookingStatus, target: BookingStatus) -> Result<()> {
    validate_transition(role, current, target).into_result()
}
