//! File system utilities for motdesk
//!
//! Provides path resolution, JSON file operations and the reminder settings mirror.

mod json;
mod paths;
mod reminder_cache;

pub use json::{read_config, read_json, write_json};
pub use paths::{get_config_path, get_motdesk_dir, get_reminder_cache_path, resolve_cwd};
pub use reminder_cache::{ReminderCache, DAYS_KEY, ENABLED_KEY, MESSAGE_KEY};
