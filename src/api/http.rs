//! HTTP adapter for the booking platform API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{backend_message, MotdeskError, Result};
use crate::schemas::{
    Booking, BookingQuery, BookingStatus, Config, Page, ReminderSettings, SendRemindersReceipt,
    SendRemindersRequest, Vehicle, VehicleQuery,
};

use super::BackendPort;

/// reqwest-backed implementation of [`BackendPort`]
pub struct HttpBackend {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base: Url, token: Option<String>, timeout: Duration) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(MotdeskError::ConfigError(format!(
                "api base URL cannot carry paths: {}",
                base
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpBackend {
            client,
            base,
            token,
        })
    }

    /// Build a client from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let base = Url::parse(&config.api_base_url).map_err(|e| {
            MotdeskError::ConfigError(format!("invalid api_base_url {}: {}", config.api_base_url, e))
        })?;
        Self::new(
            base,
            config.api_token.clone(),
            Duration::from_secs(config.request_timeout_seconds),
        )
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| MotdeskError::ConfigError("invalid api base URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Decode a success body, or turn an error status into a backend error.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    // Error bodies are best effort; an unreadable one still yields the generic message.
    let payload = response.json::<Value>().await.unwrap_or(Value::Null);
    let message = backend_message(&payload);
    debug!(status = status.as_u16(), %message, "backend rejected request");

    if status == StatusCode::NOT_FOUND {
        return Err(MotdeskError::NotFound(message));
    }
    Err(MotdeskError::Backend {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BackendPort for HttpBackend {
    #[instrument(name = "motdesk.http.list_bookings", skip_all, fields(base = %self.base))]
    async fn list_bookings(&self, query: &BookingQuery) -> Result<Page<Booking>> {
        let url = self.url(&["bookings"])?;
        let response = self
            .request(Method::GET, url)
            .query(&query.to_pairs())
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(name = "motdesk.http.get_booking", skip_all, fields(booking_id = %id))]
    async fn get_booking(&self, id: &str) -> Result<Booking> {
        let url = self.url(&["booking", id])?;
        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    #[instrument(
        name = "motdesk.http.update_booking_status",
        skip_all,
        fields(booking_id = %id, status = %status)
    )]
    async fn update_booking_status(&self, id: &str, status: BookingStatus) -> Result<Booking> {
        let url = self.url(&["booking", id, "status"])?;
        let response = self
            .request(Method::PATCH, url)
            .json(&json!({ "status": status }))
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(name = "motdesk.http.list_vehicles", skip_all, fields(base = %self.base))]
    async fn list_vehicles(&self, query: &VehicleQuery) -> Result<Page<Vehicle>> {
        let url = self.url(&["vehicles"])?;
        let response = self
            .request(Method::GET, url)
            .query(&query.to_pairs())
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(name = "motdesk.http.get_reminder_settings", skip_all)]
    async fn get_reminder_settings(&self) -> Result<ReminderSettings> {
        let url = self.url(&["reminder-settings"])?;
        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    #[instrument(name = "motdesk.http.update_reminder_settings", skip_all)]
    async fn update_reminder_settings(&self, settings: &ReminderSettings) -> Result<ReminderSettings> {
        let url = self.url(&["reminder-settings"])?;
        let response = self
            .request(Method::PATCH, url)
            .json(settings)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(
        name = "motdesk.http.send_reminders",
        skip_all,
        fields(vehicles = request.vehicle_ids.len(), drivers = request.driver_ids.len())
    )]
    async fn send_reminders(&self, request: &SendRemindersRequest) -> Result<SendRemindersReceipt> {
        let url = self.url(&["reminders", "send"])?;
        let response = self
            .request(Method::POST, url)
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}
