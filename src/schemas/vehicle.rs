//! Vehicle schema - The reminder-relevant projection of a driver's vehicle

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A vehicle as listed by the backend. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,

    /// Owning driver, if the backend resolved it
    #[serde(default)]
    pub driver_id: Option<String>,

    #[serde(default)]
    pub driver_name: Option<String>,

    pub registration: String,

    /// MOT expiry exactly as sent by the backend (may be null or malformed)
    #[serde(default)]
    pub mot_expiry: Option<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, registration: impl Into<String>) -> Self {
        Vehicle {
            id: id.into(),
            driver_id: None,
            driver_name: None,
            registration: registration.into(),
            mot_expiry: None,
        }
    }

    /// Builder-style setter for the raw expiry value
    pub fn with_mot_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.mot_expiry = Some(expiry.into());
        self
    }

    /// Builder-style setter for the owning driver
    pub fn with_driver(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.driver_id = Some(id.into());
        self.driver_name = Some(name.into());
        self
    }

    /// Parsed expiry date.
    ///
    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is
    /// used). Anything else is treated as "no expiry date".
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        let raw = self.mot_expiry.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.date_naive())
    }
}
