//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

pub const API_URL_ENV: &str = "MOTDESK_API_URL";
pub const API_TOKEN_ENV: &str = "MOTDESK_API_TOKEN";

/// Load configuration from `.motdesk/config.json`, falling back to defaults.
///
/// `MOTDESK_API_URL` and `MOTDESK_API_TOKEN` override the file.
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    Ok(apply_overrides(
        config,
        std::env::var(API_URL_ENV).ok(),
        std::env::var(API_TOKEN_ENV).ok(),
    ))
}

fn apply_overrides(mut config: Config, api_url: Option<String>, api_token: Option<String>) -> Config {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        debug!(%url, "api base URL taken from environment");
        config.api_base_url = url;
    }
    if let Some(token) = api_token.filter(|t| !t.trim().is_empty()) {
        config.api_token = Some(token);
    }
    config
}
