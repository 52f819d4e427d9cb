//! Operator interaction seams: confirmation, notifications, in-flight guards

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::{MotdeskError, Result};
use crate::schemas::BookingStatus;

/// What the operator is asked before a status change is dispatched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    pub booking_id: String,
    /// Driver or customer the booking belongs to
    pub subject: String,
    pub target: BookingStatus,
    pub target_label: &'static str,
}

impl ConfirmationPrompt {
    pub fn question(&self) -> String {
        format!(
            "Mark the booking for {} as {}?",
            self.subject,
            self.target_label.to_lowercase()
        )
    }
}

/// Asks the operator to confirm a destructive action
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool;
}

/// Confirms everything; used for `--yes`
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&self, _prompt: &ConfirmationPrompt) -> bool {
        true
    }
}

/// Transient, dismissible message shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Error(String),
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Routes notices to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(message) => info!(%message, "action succeeded"),
            Notice::Error(message) => error!(%message, "action failed"),
        }
    }
}

/// At most one outstanding request per control.
///
/// Controls are identified by a string key (e.g. `booking:bk-1`).
#[derive(Clone, Default)]
pub struct InFlight {
    busy: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `control` busy until the returned guard is dropped.
    ///
    /// # Errors
    /// * `InFlight` - If the control already has a request outstanding
    pub fn acquire(&self, control: impl Into<String>) -> Result<InFlightGuard> {
        let control = control.into();
        let mut busy = self.busy.lock();
        if !busy.insert(control.clone()) {
            return Err(MotdeskError::InFlight(control));
        }
        Ok(InFlightGuard {
            busy: Arc::clone(&self.busy),
            control,
        })
    }

    pub fn is_busy(&self, control: &str) -> bool {
        self.busy.lock().contains(control)
    }
}

pub struct InFlightGuard {
    busy: Arc<Mutex<HashSet<String>>>,
    control: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.lock().remove(&self.control);
    }
}
