//! Reminder dispatch
//!
//! Turns an eligibility result into a `POST reminders/send` request. Delivery
//! and send history belong to the backend.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::api::BackendPort;
use crate::domain::ReminderEligibility;
use crate::errors::{MotdeskError, Result};
use crate::schemas::{ReminderConfig, SendRemindersReceipt, SendRemindersRequest};

use super::interaction::{InFlight, Notice, Notifier};

const SEND_CONTROL: &str = "reminders:send";

/// Who the reminders are addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderTarget {
    /// One reminder per eligible vehicle
    #[default]
    Vehicles,
    /// One reminder per driver owning an eligible vehicle
    Drivers,
}

/// Assemble the send request from the eligible vehicles.
///
/// # Errors
/// * `Validation` - If nothing is selected
pub fn build_send_request(
    eligibility: &ReminderEligibility,
    target: ReminderTarget,
    config: &ReminderConfig,
    message_override: Option<&str>,
) -> Result<SendRemindersRequest> {
    let message = message_override
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| config.message.clone());

    let (vehicle_ids, driver_ids) = match target {
        ReminderTarget::Vehicles => (
            eligibility
                .needs_reminder
                .iter()
                .map(|v| v.id.clone())
                .collect::<Vec<_>>(),
            Vec::new(),
        ),
        ReminderTarget::Drivers => {
            let mut seen = BTreeSet::new();
            let drivers = eligibility
                .needs_reminder
                .iter()
                .filter_map(|v| v.driver_id.clone())
                .filter(|id| seen.insert(id.clone()))
                .collect::<Vec<_>>();
            (Vec::new(), drivers)
        }
    };

    if vehicle_ids.is_empty() && driver_ids.is_empty() {
        return Err(MotdeskError::Validation(
            "no vehicles selected for reminders".to_string(),
        ));
    }

    Ok(SendRemindersRequest {
        vehicle_ids,
        driver_ids,
        message,
    })
}

/// Sends reminders through the backend, one request at a time
pub struct ReminderDispatcher {
    backend: Arc<dyn BackendPort>,
    notifier: Arc<dyn Notifier>,
    in_flight: InFlight,
}

impl ReminderDispatcher {
    pub fn new(backend: Arc<dyn BackendPort>, notifier: Arc<dyn Notifier>) -> Self {
        ReminderDispatcher {
            backend,
            notifier,
            in_flight: InFlight::new(),
        }
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    #[instrument(
        name = "motdesk.reminders.send",
        skip_all,
        fields(eligible = eligibility.eligible_count(), audience = ?target)
    )]
    pub async fn send(
        &self,
        eligibility: &ReminderEligibility,
        target: ReminderTarget,
        config: &ReminderConfig,
        message_override: Option<&str>,
    ) -> Result<SendRemindersReceipt> {
        let request = build_send_request(eligibility, target, config, message_override)?;
        let _guard = self.in_flight.acquire(SEND_CONTROL)?;

        match self.backend.send_reminders(&request).await {
            Ok(receipt) => {
                info!(sent = receipt.sent, failed = receipt.failed, "reminders dispatched");
                self.notifier.notify(Notice::Success(format!(
                    "{} reminder(s) sent",
                    receipt.sent
                )));
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "reminder dispatch rejected");
                self.notifier.notify(Notice::Error(e.user_message()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::{Call, InMemoryBackend};
    use crate::domain::compute_reminder_eligibility;
    use crate::schemas::{LeadTime, Vehicle};
    use crate::workflow::interaction::testing::RecordingNotifier;
    use chrono::NaiveDate;

    fn eligibility() -> ReminderEligibility {
        let vehicles = vec![
            Vehicle::new("v1", "AA11 AAA")
                .with_mot_expiry("2024-01-03")
                .with_driver("d1", "Sam"),
            Vehicle::new("v2", "BB22 BBB")
                .with_mot_expiry("2024-01-05")
                .with_driver("d1", "Sam"),
            Vehicle::new("v3", "CC33 CCC").with_mot_expiry("2024-01-06"),
            Vehicle::new("v4", "DD44 DDD").with_mot_expiry("2024-06-01"),
        ];
        compute_reminder_eligibility(&vehicles, &config(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn config() -> ReminderConfig {
        ReminderConfig::new(true, LeadTime::new(7).unwrap(), "Book your MOT")
    }

    #[test]
    fn test_build_request_by_vehicle() {
        let req = build_send_request(&eligibility(), ReminderTarget::Vehicles, &config(), None).unwrap();
        assert_eq!(req.vehicle_ids, vec!["v1", "v2", "v3"]);
        assert!(req.driver_ids.is_empty());
        assert_eq!(req.message, "Book your MOT");
    }

    #[test]
    fn test_build_request_by_driver_dedups() {
        let req = build_send_request(&eligibility(), ReminderTarget::Drivers, &config(), Some("  Hi  "))
            .unwrap();
        assert_eq!(req.driver_ids, vec!["d1"]);
        assert!(req.vehicle_ids.is_empty());
        assert_eq!(req.message, "Hi");
    }

    #[test]
    fn test_build_request_blank_override_uses_config() {
        let req = build_send_request(&eligibility(), ReminderTarget::Vehicles, &config(), Some(" "))
            .unwrap();
        assert_eq!(req.message, "Book your MOT");
    }

    #[tokio::test]
    async fn test_empty_selection_sends_nothing() {
        let backend = Arc::new(InMemoryBackend::new());
        let dispatcher = ReminderDispatcher::new(backend.clone(), Arc::new(RecordingNotifier::default()));
        let empty = compute_reminder_eligibility(&[], &config(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let err = dispatcher
            .send(&empty, ReminderTarget::Vehicles, &config(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, MotdeskError::Validation(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_send_dispatches_and_notifies() {
        let backend = Arc::new(InMemoryBackend::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = ReminderDispatcher::new(backend.clone(), notifier.clone());

        let receipt = dispatcher
            .send(&eligibility(), ReminderTarget::Vehicles, &config(), None)
            .await
            .unwrap();

        assert_eq!(receipt.sent, 3);
        assert!(matches!(backend.calls()[0], Call::SendReminders(_)));
        assert_eq!(
            notifier.notices.lock().as_slice(),
            &[Notice::Success("3 reminder(s) sent".to_string())]
        );
        assert!(!dispatcher.in_flight().is_busy(SEND_CONTROL));
    }

    #[tokio::test]
    async fn test_send_failure_is_notified() {
        let backend = Arc::new(InMemoryBackend::new().failing(503, "Notification service unavailable"));
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = ReminderDispatcher::new(backend.clone(), notifier.clone());

        let result = dispatcher
            .send(&eligibility(), ReminderTarget::Drivers, &config(), None)
            .await;

        assert!(result.is_err());
        assert_eq!(
            notifier.notices.lock().as_slice(),
            &[Notice::Error("Notification service unavailable".to_string())]
        );
    }
}
