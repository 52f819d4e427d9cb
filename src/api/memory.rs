//! In-memory backend used by the workflow tests

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::{MotdeskError, Result};
use crate::schemas::{
    Booking, BookingQuery, BookingStatus, Page, ReminderSettings, SendRemindersReceipt,
    SendRemindersRequest, Vehicle, VehicleQuery,
};

use super::BackendPort;

/// Every call the backend received, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListBookings(BookingQuery),
    GetBooking(String),
    UpdateStatus(String, BookingStatus),
    ListVehicles(VehicleQuery),
    GetSettings,
    UpdateSettings(ReminderSettings),
    SendReminders(SendRemindersRequest),
}

#[derive(Default)]
struct State {
    bookings: Vec<Booking>,
    vehicles: Vec<Vehicle>,
    settings: Option<ReminderSettings>,
    calls: Vec<Call>,
    fail_with: Option<(u16, String)>,
    page_cap: Option<usize>,
}

#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        self.state.lock().bookings = bookings;
        self
    }

    pub fn with_vehicles(self, vehicles: Vec<Vehicle>) -> Self {
        self.state.lock().vehicles = vehicles;
        self
    }

    pub fn with_settings(self, settings: ReminderSettings) -> Self {
        self.state.lock().settings = Some(settings);
        self
    }

    /// Make every mutating call fail with this status and message
    pub fn failing(self, status: u16, message: &str) -> Self {
        self.state.lock().fail_with = Some((status, message.to_string()));
        self
    }

    /// Serve at most `cap` vehicles per page whatever limit is requested
    pub fn with_page_cap(self, cap: usize) -> Self {
        self.state.lock().page_cap = Some(cap);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn booking(&self, id: &str) -> Option<Booking> {
        self.state.lock().bookings.iter().find(|b| b.id == id).cloned()
    }

    fn record(&self, call: Call) {
        self.state.lock().calls.push(call);
    }

    fn failure(&self) -> Option<MotdeskError> {
        self.state
            .lock()
            .fail_with
            .clone()
            .map(|(status, message)| MotdeskError::Backend { status, message })
    }
}

#[async_trait]
impl BackendPort for InMemoryBackend {
    async fn list_bookings(&self, query: &BookingQuery) -> Result<Page<Booking>> {
        self.record(Call::ListBookings(query.clone()));
        let state = self.state.lock();
        let items: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| query.status.map_or(true, |s| b.status == s))
            .cloned()
            .collect();
        Ok(Page {
            total: items.len() as u64,
            items,
            page: 1,
            limit: query.limit.unwrap_or(50),
        })
    }

    async fn get_booking(&self, id: &str) -> Result<Booking> {
        self.record(Call::GetBooking(id.to_string()));
        self.booking(id)
            .ok_or_else(|| MotdeskError::NotFound(format!("Booking {} not found", id)))
    }

    async fn update_booking_status(&self, id: &str, status: BookingStatus) -> Result<Booking> {
        self.record(Call::UpdateStatus(id.to_string(), status));
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut state = self.state.lock();
        let booking = state
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| MotdeskError::NotFound(format!("Booking {} not found", id)))?;
        booking.status = status;
        Ok(booking.clone())
    }

    async fn list_vehicles(&self, query: &VehicleQuery) -> Result<Page<Vehicle>> {
        self.record(Call::ListVehicles(query.clone()));
        let state = self.state.lock();
        let limit = query.limit.unwrap_or(50) as usize;
        let per_page = state.page_cap.map_or(limit, |cap| cap.min(limit)).max(1);
        let page = query.page.unwrap_or(1).max(1);
        let items: Vec<Vehicle> = state
            .vehicles
            .iter()
            .skip((page as usize - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect();
        Ok(Page {
            total: state.vehicles.len() as u64,
            items,
            page,
            limit: per_page as u32,
        })
    }

    async fn get_reminder_settings(&self) -> Result<ReminderSettings> {
        self.record(Call::GetSettings);
        self.state
            .lock()
            .settings
            .clone()
            .ok_or_else(|| MotdeskError::NotFound("Reminder settings not found".to_string()))
    }

    async fn update_reminder_settings(&self, settings: &ReminderSettings) -> Result<ReminderSettings> {
        self.record(Call::UpdateSettings(settings.clone()));
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.state.lock().settings = Some(settings.clone());
        Ok(settings.clone())
    }

    async fn send_reminders(&self, request: &SendRemindersRequest) -> Result<SendRemindersReceipt> {
        self.record(Call::SendReminders(request.clone()));
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let sent = (request.vehicle_ids.len() + request.driver_ids.len()) as u32;
        Ok(SendRemindersReceipt { sent, failed: 0 })
    }
}
