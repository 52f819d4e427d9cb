//! Reminder schemas - Configuration, backend settings and send requests

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{MotdeskError, Result};

/// Message used when the operator leaves the template blank.
pub const DEFAULT_REMINDER_MESSAGE: &str =
    "Your vehicle's MOT expires soon. Book your MOT test now to stay road legal.";

/// Lead times the dashboard offers, in days.
pub const LEAD_TIME_CHOICES: [u32; 4] = [7, 14, 21, 30];

/// Days before MOT expiry at which a vehicle becomes due a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LeadTime(u32);

impl LeadTime {
    /// Build a lead time, rejecting anything outside [`LEAD_TIME_CHOICES`].
    pub fn new(days: u32) -> Result<Self> {
        if LEAD_TIME_CHOICES.contains(&days) {
            Ok(LeadTime(days))
        } else {
            Err(MotdeskError::Validation(format!(
                "lead time must be one of 7, 14, 21 or 30 days, got {}",
                days
            )))
        }
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for LeadTime {
    fn default() -> Self {
        LeadTime(14)
    }
}

impl TryFrom<u32> for LeadTime {
    type Error = String;

    fn try_from(days: u32) -> std::result::Result<Self, Self::Error> {
        LeadTime::new(days).map_err(|e| e.to_string())
    }
}

impl From<LeadTime> for u32 {
    fn from(lead: LeadTime) -> u32 {
        lead.0
    }
}

impl std::fmt::Display for LeadTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// Process-wide reminder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub enabled: bool,
    pub lead_time: LeadTime,
    pub message: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            enabled: false,
            lead_time: LeadTime::default(),
            message: DEFAULT_REMINDER_MESSAGE.to_string(),
        }
    }
}

impl ReminderConfig {
    pub fn new(enabled: bool, lead_time: LeadTime, message: impl Into<String>) -> Self {
        ReminderConfig {
            enabled,
            lead_time,
            message: normalize_message(message.into()),
        }
    }

    /// Interpret settings returned by the backend.
    ///
    /// The first reminder period is the lead time. Periods outside the
    /// offered choices fall back to the default.
    pub fn from_settings(settings: &ReminderSettings) -> Self {
        let lead_time = match settings.reminder_periods.first() {
            Some(&days) => LeadTime::new(days).unwrap_or_else(|_| {
                warn!(days, "backend reminder period is not an offered choice, using default");
                LeadTime::default()
            }),
            None => LeadTime::default(),
        };

        ReminderConfig {
            enabled: settings.enabled,
            lead_time,
            message: normalize_message(settings.reminder_message.clone().unwrap_or_default()),
        }
    }

    /// Settings payload for `PATCH reminder-settings`
    pub fn to_settings(&self) -> ReminderSettings {
        ReminderSettings {
            enabled: self.enabled,
            reminder_periods: vec![self.lead_time.days()],
            reminder_message: Some(self.message.clone()),
        }
    }
}

fn normalize_message(message: String) -> String {
    if message.trim().is_empty() {
        DEFAULT_REMINDER_MESSAGE.to_string()
    } else {
        message
    }
}

/// Reminder settings as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub enabled: bool,

    #[serde(default)]
    pub reminder_periods: Vec<u32>,

    #[serde(default)]
    pub reminder_message: Option<String>,
}

/// Body of `POST reminders/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRemindersRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vehicle_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub driver_ids: Vec<String>,

    pub message: String,
}

/// What the backend reports after dispatching reminders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendRemindersReceipt {
    #[serde(default)]
    pub sent: u32,

    #[serde(default)]
    pub failed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_time_choices() {
        for days in LEAD_TIME_CHOICES {
            assert_eq!(LeadTime::new(days).unwrap().days(), days);
        }
        assert!(LeadTime::new(0).is_err());
        assert!(LeadTime::new(10).is_err());
        assert!(matches!(LeadTime::new(45), Err(MotdeskError::Validation(_))));
    }

    #[test]
    fn test_lead_time_default() {
        assert_eq!(LeadTime::default().days(), 14);
    }

    #[test]
    fn test_lead_time_deserialization_rejects_unknown() {
        assert!(serde_json::from_str::<LeadTime>("21").is_ok());
        assert!(serde_json::from_str::<LeadTime>("5").is_err());
    }

    #[test]
    fn test_config_blank_message_defaulted() {
        let config = ReminderConfig::new(true, LeadTime::default(), "   ");
        assert_eq!(config.message, DEFAULT_REMINDER_MESSAGE);
    }

    #[test]
    fn test_from_settings() {
        let settings = ReminderSettings {
            enabled: true,
            reminder_periods: vec![7, 30],
            reminder_message: Some("Book now".to_string()),
        };
        let config = ReminderConfig::from_settings(&settings);
        assert!(config.enabled);
        assert_eq!(config.lead_time.days(), 7);
        assert_eq!(config.message, "Book now");
    }

    #[test]
    fn test_from_settings_falls_back() {
        let settings = ReminderSettings {
            enabled: false,
            reminder_periods: vec![3],
            reminder_message: None,
        };
        let config = ReminderConfig::from_settings(&settings);
        assert_eq!(config.lead_time.days(), 14);
        assert_eq!(config.message, DEFAULT_REMINDER_MESSAGE);
    }

    #[test]
    fn test_settings_wire_format() {
        let config = ReminderConfig::new(true, LeadTime::new(21).unwrap(), "Hi");
        let json = serde_json::to_value(config.to_settings()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"enabled": true, "reminderPeriods": [21], "reminderMessage": "Hi"})
        );
    }

    #[test]
    fn test_send_request_skips_empty_ids() {
        let req = SendRemindersRequest {
            vehicle_ids: vec!["v1".to_string()],
            driver_ids: vec![],
            message: "m".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"vehicleIds": ["v1"], "message": "m"}));
    }
}
