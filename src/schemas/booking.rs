//! Booking schema - An MOT test appointment and its lifecycle status

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Requested by the driver, awaiting the garage
    Pending,
    /// Accepted by the garage
    Accepted,
    /// Declined by the garage
    Rejected,
    /// Test carried out
    Completed,
    /// Called off after acceptance
    Cancelled,
}

impl BookingStatus {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Accepted => "Accepted",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Canonical wire name
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Accepted => "ACCEPTED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(BookingStatus::Pending),
            "ACCEPTED" => Ok(BookingStatus::Accepted),
            "REJECTED" => Ok(BookingStatus::Rejected),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Unknown booking status: {}", s)),
        }
    }
}

/// Driver who made the booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRef {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Garage the booking is with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageRef {
    pub name: String,
}

/// An MOT booking as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque backend identifier
    pub id: String,

    /// Current lifecycle status
    pub status: BookingStatus,

    /// When the booking was placed
    pub order_date: DateTime<Utc>,

    /// Amount charged, never negative
    #[serde(deserialize_with = "non_negative_amount")]
    pub total_amount: Decimal,

    #[serde(default)]
    pub driver: Option<DriverRef>,

    #[serde(default)]
    pub garage: Option<GarageRef>,

    #[serde(default)]
    pub vehicle_registration: Option<String>,
}

impl Booking {
    /// Name shown to the operator when confirming an action on this booking.
    pub fn subject(&self) -> String {
        if let Some(driver) = self.driver.as_ref().filter(|d| !d.name.trim().is_empty()) {
            return driver.name.clone();
        }
        if let Some(reg) = self
            .vehicle_registration
            .as_ref()
            .filter(|r| !r.trim().is_empty())
        {
            return reg.clone();
        }
        format!("booking {}", self.id)
    }

    /// Whether the booking has reached a status with no way out
    pub fn is_closed(&self) -> bool {
        crate::domain::is_terminal_status(self.status)
    }
}

fn non_negative_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(serde::de::Error::custom(format!(
            "totalAmount must not be negative, got {}",
            amount
        )));
    }
    Ok(amount)
}
