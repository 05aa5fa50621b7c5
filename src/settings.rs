//! Engine settings persistence.
//!
//! This module stores the shell language (`ui_language`) across restarts.
//! The Language screen writes it through the `ui_language` console command;
//! the next launch reads it back as the current game folder.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::GameInfo;

/// Language used before any choice has been saved
pub const DEFAULT_LANGUAGE: &str = "english";

/// Errors that can occur while saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Platform config directory could not be determined
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to create the config directory
    #[error("Failed to create config directory: {0}")]
    CreateDir(std::io::Error),

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the settings file
    #[error("Failed to write settings file: {0}")]
    Write(std::io::Error),
}

/// Engine settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Shell language code, also the active content folder
    #[serde(default = "default_language")]
    pub ui_language: String,
}

fn default_version() -> u32 {
    1
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            ui_language: default_language(),
        }
    }
}

impl GameInfo for UserSettings {
    fn game_folder(&self) -> &str {
        &self.ui_language
    }
}

impl UserSettings {
    /// Get the config directory path for the shell
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("LangMenu"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("LangMenu"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("langmenu"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the platform config directory
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the platform config directory
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::get_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SettingsError::CreateDir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(SettingsError::Write)?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }
}
