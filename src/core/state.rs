//! Selector settings and session state
//!
//! Contains:
//! - SelectorSettings: persisted preferences for the selector
//! - SessionState: the streaming session contract the global
//!   selective-recording switch is gated on
//! - SessionFlags: a plain in-memory SessionState

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a node is brought into view after auto-expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Selector preferences
///
/// Persisted to <data dir>/Scene Selector/selector_settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorSettings {
    /// Expand the folders above a node selected elsewhere in the editor
    #[serde(default = "default_true")]
    pub auto_expand_on_select: bool,
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,
    /// Show the "how to expand folders" hint when folders exist
    #[serde(default = "default_true")]
    pub show_folder_help_tip: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            auto_expand_on_select: true,
            scroll_behavior: ScrollBehavior::Smooth,
            show_folder_help_tip: true,
        }
    }
}

impl SelectorSettings {
    const SETTINGS_FILE: &'static str = "selector_settings.json";

    /// Get the app data directory (<data dir>/Scene Selector/)
    fn get_app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        let app_dir = data_dir.join("Scene Selector");

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }

        Ok(app_dir)
    }

    pub fn settings_path() -> Result<PathBuf, String> {
        Ok(Self::get_app_data_dir()?.join(Self::SETTINGS_FILE))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::settings_path().and_then(|p| Self::load_from(&p)) {
            Ok(settings) => {
                log::debug!("Loaded selector settings from disk");
                settings
            }
            Err(e) => {
                log::debug!("Using default selector settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err("Settings file not found".to_string());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings: {}", e))?;

        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write settings: {}", e))?;

        log::debug!("Saved selector settings to {:?}", path);
        Ok(())
    }
}

/// Streaming session contract
pub trait SessionState {
    /// No stream or recording is running
    fn is_idle(&self) -> bool;

    fn is_replay_buffer_active(&self) -> bool;

    fn selective_recording(&self) -> bool;

    fn set_selective_recording(&mut self, enabled: bool);

    /// Selective recording can't be switched mid-broadcast
    fn selective_recording_locked(&self) -> bool {
        self.is_replay_buffer_active() || !self.is_idle()
    }
}

/// In-memory session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    pub streaming: bool,
    pub recording: bool,
    pub replay_buffer_active: bool,
    pub selective_recording: bool,
}

impl SessionState for SessionFlags {
    fn is_idle(&self) -> bool {
        !self.streaming && !self.recording
    }

    fn is_replay_buffer_active(&self) -> bool {
        self.replay_buffer_active
    }

    fn selective_recording(&self) -> bool {
        self.selective_recording
    }

    fn set_selective_recording(&mut self, enabled: bool) {
        self.selective_recording = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = SelectorSettings::default();
        assert!(settings.auto_expand_on_select);
        assert_eq!(settings.scroll_behavior, ScrollBehavior::Smooth);
        assert!(settings.show_folder_help_tip);
    }

    #[test]
    fn test_settings_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("selector_settings.json");

        let settings = SelectorSettings {
            auto_expand_on_select: false,
            scroll_behavior: ScrollBehavior::Instant,
            show_folder_help_tip: false,
        };
        settings.save_to(&path).unwrap();

        let loaded = SelectorSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("selector_settings.json");
        std::fs::write(&path, r#"{"scroll_behavior":"instant"}"#).unwrap();

        let loaded = SelectorSettings::load_from(&path).unwrap();
        assert!(loaded.auto_expand_on_select);
        assert_eq!(loaded.scroll_behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn test_settings_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SelectorSettings::load_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_settings_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("selector_settings.json");
        std::fs::write(&path, "{").unwrap();
        assert!(SelectorSettings::load_from(&path).is_err());
    }

    #[test]
    fn test_session_idle() {
        let mut session = SessionFlags::default();
        assert!(session.is_idle());
        assert!(!session.selective_recording_locked());

        session.recording = true;
        assert!(!session.is_idle());
        assert!(session.selective_recording_locked());
    }

    #[test]
    fn test_session_replay_buffer_locks() {
        let session = SessionFlags {
            replay_buffer_active: true,
            ..Default::default()
        };
        assert!(session.is_idle());
        assert!(session.selective_recording_locked());
    }
}
