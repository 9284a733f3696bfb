pub mod bulk;
pub mod config;
pub mod controller;
pub mod directory;
pub mod error;
pub mod prefs;

pub use bulk::{BulkDeleteReport, delete_contacts};
pub use config::{Config, resolve_data_dir};
pub use controller::{FetchOutcome, ListController, MIN_SUGGEST_CHARS, SUGGEST_LIMIT};
pub use directory::CompanyDirectory;
pub use error::{Error, Result};
pub use prefs::{COLUMN_VISIBILITY_KEY, ColumnPrefs};
