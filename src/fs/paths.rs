//! Path resolution utilities for motdesk
//!
//! Everything motdesk keeps on disk lives under a `.motdesk` directory:
//! the operator's config file and the reminder settings mirror.

use std::path::{Path, PathBuf};

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .motdesk directory.
pub fn get_motdesk_dir(root: &Path) -> PathBuf {
    root.join(".motdesk")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_motdesk_dir(root).join("config.json")
}

/// Get the path to the local reminder settings mirror.
pub fn get_reminder_cache_path(root: &Path) -> PathBuf {
    get_motdesk_dir(root).join("reminder-cache.json")
}
