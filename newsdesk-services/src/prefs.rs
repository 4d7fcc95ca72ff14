//! Preferences persistence
//!
//! One JSON object on disk, written wholesale on explicit save. A missing
//! or malformed file means "no saved preferences" and never an error; a
//! failed save leaves the previous file untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use newsdesk_core::{NewsdeskError, NewsdeskResult, Preferences};

/// File-backed preferences store
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the saved snapshot, falling back to defaults on any failure
    pub fn load(&self) -> Preferences {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(
                        "Malformed preferences at {}: {}; using defaults",
                        self.path.display(),
                        e
                    );
                    Preferences::default()
                }
            },
            Err(_) => {
                debug!(
                    "No preferences file at {}; using defaults",
                    self.path.display()
                );
                Preferences::default()
            }
        }
    }

    /// Persist the whole snapshot
    ///
    /// Writes to a sibling temp file and renames it into place, so a
    /// failed save leaves the previous snapshot intact.
    pub fn save(&self, prefs: &Preferences) -> NewsdeskResult<()> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| NewsdeskError::internal(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &json).map_err(|e| NewsdeskError::io(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| NewsdeskError::io(e.to_string()))?;
        debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::SortMode;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("newsdesk-prefs-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = PrefsStore::new(temp_path("missing"));
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn round_trip_preserves_settings() {
        let path = temp_path("roundtrip");
        let store = PrefsStore::new(&path);

        let mut prefs = Preferences::default();
        prefs.feed_choice = "Politics".to_string();
        prefs.num_articles = 25;
        prefs.tz_choice = "US/Eastern".to_string();
        prefs.sort = SortMode::Oldest;

        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{not json").unwrap();

        let store = PrefsStore::new(&path);
        assert_eq!(store.load(), Preferences::default());

        std::fs::remove_file(&path).ok();
    }
}
