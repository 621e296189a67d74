//! Settings management for marginalia

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Persisted application settings
///
/// The Readwise API token is the only field marginalia itself reads. Fields
/// written by newer versions survive a load/save cycle through `extra`, and
/// missing fields fall back to their defaults rather than failing the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Readwise API token, empty until the user configures one
    #[serde(default)]
    pub api_token: String,

    /// Unrecognized fields, preserved verbatim across saves
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Settings {
    /// Load settings from disk, or defaults if nothing has been saved yet
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Save settings to disk, overwriting any previous value
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse settings.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize settings")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the settings file
    pub fn settings_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "marginalia")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("settings.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_settings_have_empty_token() {
        let settings = Settings::default();
        assert_eq!(settings.api_token, "");
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.api_token, "");
    }

    #[test]
    fn save_then_load_round_trips_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.api_token = "abc123".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.api_token, "abc123");
    }

    #[test]
    fn save_of_loaded_settings_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.api_token = "abc123".to_string();
        settings.save_to(&path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        Settings::load_from(&path).unwrap().save_to(&path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_token_field_falls_back_to_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.api_token, "");
    }

    #[test]
    fn unknown_fields_survive_a_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let json = r#"{"api_token":"t","vim_mode":true,"theme":"Tokyo Night"}"#;
        std::fs::write(&path, json).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        loaded.save_to(&path).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["api_token"], "t");
        assert_eq!(saved["vim_mode"], true);
        assert_eq!(saved["theme"], "Tokyo Night");
    }
}
