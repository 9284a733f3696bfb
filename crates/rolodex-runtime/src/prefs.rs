//! Persisted column-visibility preferences.
//!
//! The browser original kept this mapping in localStorage under a
//! fixed key; here it is a JSON file in the data directory, written
//! after every mutation so a crash never loses a toggle.

use crate::error::Result;
use log::debug;
use rolodex_engine::columns::ColumnVisibility;
use rolodex_types::ColumnKey;
use std::path::{Path, PathBuf};

/// Fixed storage key; the file is `<data_dir>/column_visibility.json`.
pub const COLUMN_VISIBILITY_KEY: &str = "column_visibility";

#[derive(Debug)]
pub struct ColumnPrefs {
    visibility: ColumnVisibility,
    path: PathBuf,
}

impl ColumnPrefs {
    /// Load preferences from the data directory; a missing or
    /// unreadable file yields the default (everything visible).
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(format!("{}.json", COLUMN_VISIBILITY_KEY));
        let visibility = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        ColumnPrefs { visibility, path }
    }

    pub fn get(&self, key: ColumnKey) -> bool {
        self.visibility.get(key)
    }

    pub fn set(&mut self, key: ColumnKey, value: bool) -> Result<()> {
        self.visibility.set(key, value);
        self.persist()
    }

    pub fn toggle_all(&mut self, value: bool) -> Result<()> {
        self.visibility.toggle_all(value);
        self.persist()
    }

    pub fn is_indeterminate(&self) -> bool {
        self.visibility.is_indeterminate()
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.visibility)?;
        std::fs::write(&self.path, content)?;
        debug!("persisted column visibility to {}", self.path.display());
        Ok(())
    }
}
