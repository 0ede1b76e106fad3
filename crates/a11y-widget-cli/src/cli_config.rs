//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use a11y_widget_core::util::normalize_text_option;
use a11y_widget_core::Locale;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";
const APP_DIR_NAME: &str = "a11y-widget";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub state_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            locale: None,
            state_path: None,
        }
    }
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path();
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Explicit locale first, then `A11Y_WIDGET_LOCALE`, then the config file.
    pub fn resolve_locale(&self, explicit: Option<&str>) -> Locale {
        let requested = normalize_text_option(explicit)
            .or_else(|| normalize_text_option(std::env::var("A11Y_WIDGET_LOCALE").ok().as_deref()))
            .or_else(|| self.locale.clone());
        Locale::resolve(requested.as_deref())
    }

    /// Explicit path first, then `A11Y_WIDGET_STATE_PATH`, then the config
    /// file, then the data directory.
    pub fn resolve_state_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var_os("A11Y_WIDGET_STATE_PATH").map(PathBuf::from))
            .or_else(|| self.state_path.clone())
            .unwrap_or_else(|| {
                a11y_widget_core::FileStore::in_dir(&default_data_dir())
                    .path()
                    .to_path_buf()
            })
    }

    fn normalize(&mut self) {
        self.locale = normalize_text_option(self.locale.as_deref());
        self.state_path = self
            .state_path
            .take()
            .filter(|path| !path.as_os_str().is_empty());
    }
}
