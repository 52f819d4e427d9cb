use async_trait::async_trait;

use crate::errors::Result;
use crate::schemas::{
    Booking, BookingQuery, BookingStatus, Page, ReminderSettings, SendRemindersReceipt,
    SendRemindersRequest, Vehicle, VehicleQuery,
};

/// Transport-agnostic view of the booking platform API.
///
/// The backend owns all persistence; every mutation goes through here.
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// `GET bookings?status&search&page&limit`
    async fn list_bookings(&self, query: &BookingQuery) -> Result<Page<Booking>>;

    /// `GET booking/{id}`
    async fn get_booking(&self, id: &str) -> Result<Booking>;

    /// `PATCH booking/{id}/status`
    async fn update_booking_status(&self, id: &str, status: BookingStatus) -> Result<Booking>;

    /// `GET vehicles?…`
    async fn list_vehicles(&self, query: &VehicleQuery) -> Result<Page<Vehicle>>;

    /// `GET reminder-settings`
    async fn get_reminder_settings(&self) -> Result<ReminderSettings>;

    /// `PATCH reminder-settings`
    async fn update_reminder_settings(&self, settings: &ReminderSettings) -> Result<ReminderSettings>;

    /// `POST reminders/send`
    async fn send_reminders(&self, request: &SendRemindersRequest) -> Result<SendRemindersReceipt>;
}
