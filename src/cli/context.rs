//! Shared setup for every command

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::api::{BackendPort, HttpBackend};
use crate::config::{load_config, ReminderConfigStore};
use crate::errors::{MotdeskError, Result};
use crate::fs::{resolve_cwd, ReminderCache};
use crate::schemas::{Config, Role};

/// Resolved configuration plus the backend it points at
pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub role: Role,
    pub backend: Arc<dyn BackendPort>,
}

impl AppContext {
    /// Load config under `cwd`, apply CLI overrides and connect the backend.
    pub fn load(cwd: Option<&Path>, api_url: Option<&str>, role: Option<&str>) -> Result<Self> {
        let root = resolve_cwd(cwd);
        let mut config = load_config(&root)?;

        if let Some(url) = api_url {
            config.api_base_url = url.to_string();
        }

        let role = match role {
            Some(raw) => raw.parse::<Role>().map_err(MotdeskError::Validation)?,
            None => config.role,
        };

        let backend: Arc<dyn BackendPort> = Arc::new(HttpBackend::from_config(&config)?);
        debug!(api = %config.api_base_url, %role, "context ready");

        Ok(AppContext {
            root,
            config,
            role,
            backend,
        })
    }

    pub fn reminder_store(&self) -> ReminderConfigStore {
        ReminderConfigStore::new(self.backend.clone(), ReminderCache::for_root(&self.root))
    }
}
