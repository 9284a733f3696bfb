//! The directory service boundary.
//!
//! [`DirectoryApi`] is the seam between the core and the backend: the
//! runtime layer drives it, [`crate::HttpApi`] implements it over
//! REST, and the testing crate swaps in scripted doubles.

use crate::error::Result;
use async_trait::async_trait;
use rolodex_types::{
    CompanyDraft, CompanyId, CompanyRecord, Contact, ContactDraft, ContactId, ContactSort, UserDraft,
    UserId, UserRecord,
};
use serde::{Deserialize, Serialize};

/// Parameters of one page fetch against the contact search endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub term: String,
    pub offset: usize,
    pub limit: usize,
    pub sort: Option<ContactSort>,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub contacts: Vec<Contact>,
    pub total_count: usize,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
}

/// Outcome of a server-side spreadsheet import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    #[serde(default)]
    pub imported_count: usize,
    #[serde(default)]
    pub updated_count: usize,
    #[serde(default)]
    pub skipped_count: usize,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<CompanyRecord>>;
    async fn get_company(&self, id: CompanyId) -> Result<CompanyRecord>;
    async fn create_company(&self, draft: &CompanyDraft) -> Result<CompanyId>;
    async fn update_company(&self, id: CompanyId, draft: &CompanyDraft) -> Result<()>;
    async fn delete_company(&self, id: CompanyId) -> Result<()>;

    async fn search_contacts(&self, request: &SearchRequest) -> Result<SearchPage>;
    /// Unpaginated variant of the search endpoint, used by export.
    async fn search_all(&self, term: &str, sort: Option<ContactSort>) -> Result<Vec<Contact>>;
    async fn get_contact(&self, id: ContactId) -> Result<Contact>;
    async fn create_contact(&self, draft: &ContactDraft) -> Result<ContactId>;
    async fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> Result<()>;
    async fn delete_contact(&self, id: ContactId) -> Result<()>;
    async fn import_contacts(&self, file_name: &str, bytes: Vec<u8>) -> Result<ImportSummary>;

    async fn list_users(&self) -> Result<Vec<UserRecord>>;
    async fn create_user(&self, draft: &UserDraft) -> Result<UserId>;
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<()>;
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
