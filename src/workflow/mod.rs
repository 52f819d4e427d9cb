//! Operator workflows: status changes and reminder dispatch
//!
//! Each workflow validates locally, performs exactly one mutating backend
//! call, and reports the result through a [`Notifier`].

mod interaction;
mod reminders;
mod status_change;

pub use interaction::{
    AutoConfirm, ConfirmationPrompt, Confirmer, InFlight, InFlightGuard, LogNotifier, Notice,
    Notifier,
};
pub use reminders::{build_send_request, ReminderDispatcher, ReminderTarget};
pub use status_change::{StatusChangeOutcome, StatusChangeService};
