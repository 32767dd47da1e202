//! Shared client settings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Settings loaded at startup plus any command-line overrides.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    pub fn update(&self, apply: impl FnOnce(&mut Config)) {
        apply(&mut self.inner.write());
    }

    /// Replace the backend URL and/or bearer token. `None` leaves the value alone.
    pub fn apply_overrides(&self, base_url: Option<&str>, token: Option<&str>) {
        self.update(|config| {
            if let Some(base_url) = base_url {
                config.api.base_url = base_url.trim_end_matches('/').to_string();
            }
            if let Some(token) = token {
                config.auth.token = Some(token.to_string());
            }
        });
    }

    /// Re-read the file. A broken file leaves the current settings in place.
    ///
    /// Overrides applied earlier are lost.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
