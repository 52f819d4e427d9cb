//! MOT reminder eligibility
//!
//! Pure date arithmetic over vehicles already fetched from the backend.
//! Whether a reminder was already sent is not tracked here.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::schemas::{ReminderConfig, Vehicle};

/// Where a single vehicle stands relative to its MOT expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExpiryClass {
    /// Expires within the lead time (today included)
    NeedsReminder { days: i64 },
    /// Expiry date already passed
    Expired { days: i64 },
    /// Expires later than the lead time
    Valid { days: i64 },
    /// No usable expiry date
    Unknown,
}

/// Whole days from `reference_date` until the vehicle's MOT expiry.
///
/// Negative once the MOT has expired, `None` without a usable date.
pub fn days_until_expiry(vehicle: &Vehicle, reference_date: NaiveDate) -> Option<i64> {
    vehicle
        .expiry_date()
        .map(|expiry| (expiry - reference_date).num_days())
}

/// Classify one vehicle for a lead time of `lead_time_days`.
pub fn classify_expiry(vehicle: &Vehicle, reference_date: NaiveDate, lead_time_days: u32) -> ExpiryClass {
    match days_until_expiry(vehicle, reference_date) {
        None => ExpiryClass::Unknown,
        Some(days) if days < 0 => ExpiryClass::Expired { days },
        Some(days) if days <= i64::from(lead_time_days) => ExpiryClass::NeedsReminder { days },
        Some(days) => ExpiryClass::Valid { days },
    }
}

/// Output of [`compute_reminder_eligibility`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderEligibility {
    pub reference_date: NaiveDate,
    pub lead_time_days: u32,
    /// Vehicles expiring within the lead time, in input order
    pub needs_reminder: Vec<Vehicle>,
    /// Vehicles whose MOT has already expired, in input order
    pub expired: Vec<Vehicle>,
}

impl ReminderEligibility {
    fn empty(reference_date: NaiveDate, lead_time_days: u32) -> Self {
        ReminderEligibility {
            reference_date,
            lead_time_days,
            needs_reminder: Vec::new(),
            expired: Vec::new(),
        }
    }

    pub fn eligible_count(&self) -> usize {
        self.needs_reminder.len()
    }

    pub fn expired_count(&self) -> usize {
        self.expired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needs_reminder.is_empty()
    }
}

/// Work out which vehicles currently need an MOT reminder.
///
/// With reminders disabled the result is empty whatever the dates. Vehicles
/// without a parseable expiry date appear in neither list.
pub fn compute_reminder_eligibility(
    vehicles: &[Vehicle],
    config: &ReminderConfig,
    reference_date: NaiveDate,
) -> ReminderEligibility {
    let lead_time_days = config.lead_time.days();
    let mut result = ReminderEligibility::empty(reference_date, lead_time_days);

    if !config.enabled {
        return result;
    }

    for vehicle in vehicles {
        match classify_expiry(vehicle, reference_date, lead_time_days) {
            ExpiryClass::NeedsReminder { .. } => result.needs_reminder.push(vehicle.clone()),
            ExpiryClass::Expired { .. } => result.expired.push(vehicle.clone()),
            ExpiryClass::Valid { .. } | ExpiryClass::Unknown => {}
        }
    }

    result
}

/// [`compute_reminder_eligibility`] against today's local date.
pub fn compute_reminder_eligibility_today(vehicles: &[Vehicle], config: &ReminderConfig) -> ReminderEligibility {
    compute_reminder_eligibility(vehicles, config, Local::now().date_naive())
}
