//! Reminder configuration store
//!
//! The backend is authoritative. The local mirror is read for a fast first
//! render and overwritten whenever the backend answers.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::api::BackendPort;
use crate::errors::Result;
use crate::fs::ReminderCache;
use crate::schemas::ReminderConfig;
use crate::workflow::InFlight;

const SAVE_CONTROL: &str = "reminders:settings";

pub struct ReminderConfigStore {
    backend: Arc<dyn BackendPort>,
    cache: ReminderCache,
    in_flight: InFlight,
}

impl ReminderConfigStore {
    pub fn new(backend: Arc<dyn BackendPort>, cache: ReminderCache) -> Self {
        ReminderConfigStore {
            backend,
            cache,
            in_flight: InFlight::new(),
        }
    }

    /// Whatever the mirror holds, or defaults.
    ///
    /// An unreadable mirror is logged and treated as empty.
    pub fn cached(&self) -> ReminderConfig {
        match self.cache.read() {
            Ok(Some(config)) => config,
            Ok(None) => ReminderConfig::default(),
            Err(e) => {
                warn!(error = %e, "reminder settings mirror unreadable, using defaults");
                ReminderConfig::default()
            }
        }
    }

    /// Fetch the settings from the backend and overwrite the mirror.
    #[instrument(name = "motdesk.reminder_config.load", skip_all)]
    pub async fn load_config(&self) -> Result<ReminderConfig> {
        let settings = self.backend.get_reminder_settings().await?;
        let config = ReminderConfig::from_settings(&settings);
        self.cache.write(&config)?;
        Ok(config)
    }

    /// Save `config`, mirroring what the backend accepted.
    ///
    /// The lead time was checked when the [`LeadTime`](crate::schemas::LeadTime) was built.
    ///
    /// # Errors
    /// * `InFlight` - If a save is already outstanding
    #[instrument(
        name = "motdesk.reminder_config.save",
        skip_all,
        fields(enabled = config.enabled, lead_time = config.lead_time.days())
    )]
    pub async fn save_config(&self, config: &ReminderConfig) -> Result<ReminderConfig> {
        let _guard = self.in_flight.acquire(SAVE_CONTROL)?;
        let accepted = self
            .backend
            .update_reminder_settings(&config.to_settings())
            .await?;

        let accepted = ReminderConfig::from_settings(&accepted);
        self.cache.write(&accepted)?;
        info!("reminder settings saved");
        Ok(accepted)
    }
}
