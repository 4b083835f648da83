//! Persistent settings for the vclive client

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-facing settings, stored as one TOML file in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master enable; checked once at application start.
    pub enabled: bool,
    /// Show a notification with each network response body.
    pub network_notifications: bool,
    /// How the polling loop paces itself.
    pub sync_method: SyncMethod,
    /// Stored account credentials.
    pub user: Credentials,
}

/// How the polling task blocks until the next tick boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum SyncMethod {
    /// Sleep a fixed period matched to the nominal 60 Hz frame rate.
    #[default]
    FixedTick,
    /// Block on the host's vertical sync.
    VerticalSync,
}

/// Account credentials consumed by the session engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub token: String,
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            network_notifications: true,
            sync_method: SyncMethod::default(),
            user: Credentials::default(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            token: String::new(),
            language: "en_US".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from file, or create defaults if the file doesn't exist
    pub fn load() -> Result<Self, ClientError> {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: PathBuf) -> Result<Self, ClientError> {
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ClientError::Config(e.to_string()))?;
            let settings =
                toml::from_str(&content).map_err(|e| ClientError::Config(e.to_string()))?;
            tracing::debug!("Loaded settings from {}", path.display());
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save_to(path)?;
            Ok(settings)
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), ClientError> {
        self.save_to(Self::config_path())
    }

    fn save_to(&self, path: PathBuf) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::Config(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(())
    }

    /// Get the path to the settings file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vclive")
            .join("config.toml")
    }
}
