//! Confirm-then-dispatch booking status changes

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::api::BackendPort;
use crate::domain::{parse_status, validate_status_change};
use crate::errors::Result;
use crate::schemas::{Booking, BookingQuery, Page, Role};

use super::interaction::{ConfirmationPrompt, Confirmer, InFlight, Notice, Notifier};

/// How a status change request ended
#[derive(Debug)]
pub enum StatusChangeOutcome {
    /// Operator declined the confirmation; nothing was sent
    Declined,
    /// Backend accepted the change and the list was refetched
    Applied {
        booking: Booking,
        refreshed: Page<Booking>,
    },
}

impl StatusChangeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, StatusChangeOutcome::Applied { .. })
    }
}

/// Drives booking status changes through validation, confirmation and the backend
pub struct StatusChangeService {
    backend: Arc<dyn BackendPort>,
    confirmer: Arc<dyn Confirmer>,
    notifier: Arc<dyn Notifier>,
    in_flight: InFlight,
}

impl StatusChangeService {
    pub fn new(
        backend: Arc<dyn BackendPort>,
        confirmer: Arc<dyn Confirmer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        StatusChangeService {
            backend,
            confirmer,
            notifier,
            in_flight: InFlight::new(),
        }
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Ask to move `booking` to `target` on behalf of `role`.
    ///
    /// Validation and transition errors are returned before any network call.
    /// The local booking is never modified; on success the list matching
    /// `refresh` is refetched and returned.
    #[instrument(
        name = "motdesk.status_change",
        skip_all,
        fields(booking_id = %booking.id, current = %booking.status, requested = %target, role = %role)
    )]
    pub async fn request_status_change(
        &self,
        booking: &Booking,
        target: &str,
        role: Role,
        refresh: &BookingQuery,
    ) -> Result<StatusChangeOutcome> {
        let target = parse_status(target)?;
        validate_status_change(role, booking.status, target)?;

        let prompt = ConfirmationPrompt {
            booking_id: booking.id.clone(),
            subject: booking.subject(),
            target,
            target_label: target.label(),
        };
        if !self.confirmer.confirm(&prompt) {
            info!("status change declined");
            return Ok(StatusChangeOutcome::Declined);
        }

        let _guard = self.in_flight.acquire(format!("booking:{}", booking.id))?;

        let updated = match self.backend.update_booking_status(&booking.id, target).await {
            Ok(updated) => updated,
            Err(e) => {
                warn!(error = %e, "status update rejected");
                self.notifier.notify(Notice::Error(e.user_message()));
                return Err(e);
            }
        };

        self.notifier.notify(Notice::Success(format!(
            "Booking for {} marked as {}",
            prompt.subject,
            target.label().to_lowercase()
        )));
        info!(status = %updated.status, "status updated");

        let refreshed = self.backend.list_bookings(refresh).await?;

        Ok(StatusChangeOutcome::Applied {
            booking: updated,
            refreshed,
        })
    }
}
