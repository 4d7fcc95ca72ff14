//! Persisted user preferences
//!
//! A flat snapshot of dashboard settings. The whole struct is written on an
//! explicit save and read once at startup; any missing key falls back to
//! its default, so old preference files stay loadable.

use serde::{Deserialize, Serialize};

use crate::filter::SortMode;

/// Default thumbnail width in pixels
pub const DEFAULT_THUMB_WIDTH: u32 = 220;

/// User-adjustable dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Named feed to display
    pub feed_choice: String,
    /// Maximum articles to render
    pub num_articles: usize,
    /// Thumbnail width in pixels
    pub image_width: u32,
    /// Layout mode ("grid" or "single")
    pub layout: String,
    /// Whether thumbnails are rendered at all
    pub show_images: bool,
    /// Display timezone name ("System", "UTC", or an IANA/legacy name)
    pub tz_choice: String,
    /// Saved keyword filter
    pub keyword: Option<String>,
    /// Saved inclusive date-range bounds, as ISO dates
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// Saved sort mode
    pub sort: SortMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            feed_choice: "Top Stories".to_string(),
            num_articles: 60,
            image_width: DEFAULT_THUMB_WIDTH,
            layout: "grid".to_string(),
            show_images: true,
            tz_choice: "System".to_string(),
            keyword: None,
            date_from: None,
            date_to: None,
            sort: SortMode::Newest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"feed_choice":"Politics"}"#).unwrap();
        assert_eq!(prefs.feed_choice, "Politics");
        assert_eq!(prefs.num_articles, 60);
        assert_eq!(prefs.tz_choice, "System");
        assert_eq!(prefs.sort, SortMode::Newest);
    }

    #[test]
    fn malformed_extra_keys_are_ignored() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"num_articles":12,"unknown_setting":true}"#).unwrap();
        assert_eq!(prefs.num_articles, 12);
    }
}
