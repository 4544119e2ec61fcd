//! Icon classes for tree rows
//!
//! Item icons come from two display-data catalogs, one keyed by source type
//! and one by widget type. Folder and badge icons are fixed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FOLDER_OPEN: &str = "fas fa-folder-open";
pub const FOLDER_CLOSED: &str = "fa fa-folder";
pub const STREAMLABELS: &str = "fas fa-file-alt";
/// Widget whose type has no catalog entry
pub const UNKNOWN_WIDGET: &str = "icon-error";
/// Source whose type has no catalog entry
pub const GENERIC_SOURCE: &str = "fas fa-file";

pub const LOCKED: &str = "icon-lock";
pub const UNLOCKED: &str = "icon-unlock";
pub const VISIBLE: &str = "icon-view";
pub const HIDDEN: &str = "icon-hide";

/// Display-data catalog contract
pub trait DisplayCatalog {
    fn source_icon(&self, source_type: &str) -> Option<&str>;

    fn widget_icon(&self, widget_type: &str) -> Option<&str>;
}

/// Catalog backed by two lookup tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconCatalog {
    #[serde(default)]
    pub sources: HashMap<String, String>,
    #[serde(default)]
    pub widgets: HashMap<String, String>,
}

impl IconCatalog {
    /// Catalog with the common source and widget types
    pub fn builtin() -> Self {
        let sources = [
            ("image_source", "icon-image"),
            ("color_source", "icon-color"),
            ("slideshow", "icon-image"),
            ("text_gdiplus", "icon-text"),
            ("text_ft2_source", "icon-text"),
            ("ffmpeg_source", "icon-media"),
            ("browser_source", "icon-browser"),
            ("dshow_input", "icon-webcam"),
            ("av_capture_input", "icon-webcam"),
            ("wasapi_input_capture", "icon-mic"),
            ("wasapi_output_capture", "icon-speaker"),
            ("coreaudio_input_capture", "icon-mic"),
            ("coreaudio_output_capture", "icon-speaker"),
            ("monitor_capture", "icon-display"),
            ("display_capture", "icon-display"),
            ("window_capture", "icon-window"),
            ("game_capture", "icon-console"),
            ("scene", "icon-studio-mode-3"),
        ];
        let widgets = [
            ("AlertBox", "fas fa-bell"),
            ("ChatBox", "fas fa-comments"),
            ("DonationGoal", "fas fa-calendar"),
            ("EventList", "fas fa-th-list"),
            ("TipJar", "fas fa-beer"),
            ("ViewerCount", "fas fa-eye"),
            ("StreamBoss", "fas fa-gavel"),
            ("Credits", "fas fa-align-center"),
        ];

        Self {
            sources: sources
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            widgets: widgets
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl DisplayCatalog for IconCatalog {
    fn source_icon(&self, source_type: &str) -> Option<&str> {
        self.sources.get(source_type).map(String::as_str)
    }

    fn widget_icon(&self, widget_type: &str) -> Option<&str> {
        self.widgets.get(widget_type).map(String::as_str)
    }
}

pub fn folder_icon(expanded: bool) -> &'static str {
    if expanded { FOLDER_OPEN } else { FOLDER_CLOSED }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = IconCatalog::builtin();
        assert_eq!(catalog.source_icon("image_source"), Some("icon-image"));
        assert_eq!(catalog.widget_icon("AlertBox"), Some("fas fa-bell"));
        assert_eq!(catalog.source_icon("not_a_source"), None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = IconCatalog::default();
        assert!(catalog.source_icon("image_source").is_none());
        assert!(catalog.widget_icon("AlertBox").is_none());
    }

    #[test]
    fn test_folder_icon() {
        assert_eq!(folder_icon(true), FOLDER_OPEN);
        assert_eq!(folder_icon(false), FOLDER_CLOSED);
    }
}
