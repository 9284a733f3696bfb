//! Column visibility state for the contact table.
//!
//! The full-name and main-company columns are pinned: they read as
//! visible no matter what was stored and cannot be toggled off, so a
//! "hide everything" sweep still leaves the table identifiable.

use rolodex_types::{ALL_COLUMNS, ColumnKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ColumnKey, bool>", into = "BTreeMap<ColumnKey, bool>")]
pub struct ColumnVisibility {
    visible: BTreeMap<ColumnKey, bool>,
}

impl Default for ColumnVisibility {
    /// Everything visible.
    fn default() -> Self {
        ColumnVisibility {
            visible: ALL_COLUMNS.iter().map(|key| (*key, true)).collect(),
        }
    }
}

impl ColumnVisibility {
    pub fn get(&self, key: ColumnKey) -> bool {
        if key.is_pinned() {
            return true;
        }
        self.visible.get(&key).copied().unwrap_or(true)
    }

    /// Set one column's visibility. Pinned columns are left alone.
    pub fn set(&mut self, key: ColumnKey, value: bool) {
        if key.is_pinned() {
            return;
        }
        self.visible.insert(key, value);
    }

    /// Show or hide every togglable column at once.
    pub fn toggle_all(&mut self, value: bool) {
        for key in ALL_COLUMNS {
            if !key.is_pinned() {
                self.visible.insert(key, value);
            }
        }
    }

    /// True when some but not all togglable columns are visible; the
    /// UI's "select all" control renders tri-state from this.
    pub fn is_indeterminate(&self) -> bool {
        let total = ALL_COLUMNS.iter().filter(|key| !key.is_pinned()).count();
        let shown = ALL_COLUMNS
            .iter()
            .filter(|key| !key.is_pinned() && self.get(**key))
            .count();
        shown > 0 && shown < total
    }

    pub fn all_visible(&self) -> bool {
        ALL_COLUMNS.iter().all(|key| self.get(*key))
    }
}

impl From<BTreeMap<ColumnKey, bool>> for ColumnVisibility {
    /// Normalize persisted state: missing keys default to visible,
    /// pinned keys are forced visible.
    fn from(mut stored: BTreeMap<ColumnKey, bool>) -> Self {
        for key in ALL_COLUMNS {
            let entry = stored.entry(key).or_insert(true);
            if key.is_pinned() {
                *entry = true;
            }
        }
        ColumnVisibility { visible: stored }
    }
}

impl From<ColumnVisibility> for BTreeMap<ColumnKey, bool> {
    fn from(visibility: ColumnVisibility) -> Self {
        visibility.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_columns_survive_toggle_all_off() {
        let mut visibility = ColumnVisibility::default();
        visibility.toggle_all(false);

        assert!(visibility.get(ColumnKey::FullName));
        assert!(visibility.get(ColumnKey::MainCompany));
        assert!(!visibility.get(ColumnKey::Email));
        assert!(!visibility.get(ColumnKey::Description));
    }

    #[test]
    fn pinned_columns_ignore_set() {
        let mut visibility = ColumnVisibility::default();
        visibility.set(ColumnKey::FullName, false);
        assert!(visibility.get(ColumnKey::FullName));
    }

    #[test]
    fn indeterminate_when_partially_visible() {
        let mut visibility = ColumnVisibility::default();
        assert!(!visibility.is_indeterminate());

        visibility.set(ColumnKey::Email, false);
        assert!(visibility.is_indeterminate());

        visibility.toggle_all(false);
        assert!(!visibility.is_indeterminate());

        visibility.toggle_all(true);
        assert!(!visibility.is_indeterminate());
        assert!(visibility.all_visible());
    }

    #[test]
    fn persisted_state_normalizes_on_load() {
        // A stored blob that hid a pinned column and omitted newer keys.
        let json = r#"{"full_name": false, "email": false}"#;
        let visibility: ColumnVisibility = serde_json::from_str(json).unwrap();

        assert!(visibility.get(ColumnKey::FullName));
        assert!(!visibility.get(ColumnKey::Email));
        assert!(visibility.get(ColumnKey::Country));
    }

    #[test]
    fn round_trips_through_json() {
        let mut visibility = ColumnVisibility::default();
        visibility.set(ColumnKey::Address, false);

        let json = serde_json::to_string(&visibility).unwrap();
        let reloaded: ColumnVisibility = serde_json::from_str(&json).unwrap();
        assert_eq!(visibility, reloaded);
    }
}
