//! Pagination and list query schemas

use serde::{Deserialize, Serialize};

use super::BookingStatus;

/// One page of a backend list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,

    #[serde(default)]
    pub total: u64,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filters for `GET bookings`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl BookingQuery {
    /// Query string pairs, omitting unset filters
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Filters for `GET vehicles`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleQuery {
    pub search: Option<String>,
    pub driver_id: Option<String>,
    pub expiring_within_days: Option<u32>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl VehicleQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
        }
        if let Some(driver_id) = &self.driver_id {
            pairs.push(("driverId", driver_id.clone()));
        }
        if let Some(days) = self.expiring_within_days {
            pairs.push(("expiringWithinDays", days.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
