//! Local mirror of the reminder settings
//!
//! Three string-keyed string entries, superseded by the next successful
//! backend fetch. Never authoritative.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{MotdeskError, Result};
use crate::schemas::{LeadTime, ReminderConfig};

use super::json::{read_json, write_json};
use super::paths::get_reminder_cache_path;

pub const ENABLED_KEY: &str = "motReminderEnabled";
pub const DAYS_KEY: &str = "motReminderDays";
pub const MESSAGE_KEY: &str = "motReminderMessage";

/// File-backed reminder settings mirror
#[derive(Debug, Clone)]
pub struct ReminderCache {
    path: PathBuf,
}

impl ReminderCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ReminderCache { path: path.into() }
    }

    /// Mirror stored under the `.motdesk` directory of `root`
    pub fn for_root(root: &Path) -> Self {
        Self::new(get_reminder_cache_path(root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the mirrored configuration.
    ///
    /// Returns `Ok(None)` when nothing has been mirrored yet. Entries that
    /// fail to parse fall back to their defaults.
    pub fn read(&self) -> Result<Option<ReminderConfig>> {
        let entries: BTreeMap<String, String> = match read_json(&self.path) {
            Ok(entries) => entries,
            Err(MotdeskError::FileNotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let defaults = ReminderConfig::default();

        let enabled = entries
            .get(ENABLED_KEY)
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.enabled);

        let lead_time = entries
            .get(DAYS_KEY)
            .and_then(|v| v.parse::<u32>().ok())
            .and_then(|days| LeadTime::new(days).ok())
            .unwrap_or_else(|| {
                if entries.contains_key(DAYS_KEY) {
                    warn!(path = %self.path.display(), "ignoring unusable cached lead time");
                }
                defaults.lead_time
            });

        let message = entries.get(MESSAGE_KEY).cloned().unwrap_or_default();

        Ok(Some(ReminderConfig::new(enabled, lead_time, message)))
    }

    /// Overwrite the mirror with `config`.
    pub fn write(&self, config: &ReminderConfig) -> Result<()> {
        let mut entries = BTreeMap::new();
        entries.insert(ENABLED_KEY.to_string(), config.enabled.to_string());
        entries.insert(DAYS_KEY.to_string(), config.lead_time.days().to_string());
        entries.insert(MESSAGE_KEY.to_string(), config.message.clone());

        write_json(&self.path, &entries)?;
        debug!(path = %self.path.display(), "reminder settings mirrored");
        Ok(())
    }
}
