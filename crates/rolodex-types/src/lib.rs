pub mod columns;
pub mod company;
pub mod contact;
pub mod error;
pub mod sort;
pub mod user;

pub use columns::{ALL_COLUMNS, ColumnKey, canonical_columns};
pub use company::{CompanyDraft, CompanyId, CompanyRecord};
pub use contact::{Contact, ContactDraft, ContactId};
pub use error::{Error, Result};
pub use sort::{ContactSort, SortDirection};
pub use user::{UserDraft, UserId, UserRecord};
