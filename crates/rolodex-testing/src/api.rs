//! `DirectoryApi` doubles.

use async_trait::async_trait;
use rolodex_client::api::{DirectoryApi, ImportSummary, SearchPage, SearchRequest};
use rolodex_client::error::{Error, Result};
use rolodex_types::{
    ColumnKey, CompanyDraft, CompanyId, CompanyRecord, Contact, ContactDraft, ContactId,
    ContactSort, SortDirection, UserDraft, UserId, UserRecord,
};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

fn not_scripted() -> Error {
    Error::Api {
        status: 501,
        message: "endpoint not scripted in this test".to_string(),
    }
}

/// In-memory backend mimicking the search endpoint's semantics:
/// substring match over the searched fields, optional column sort,
/// page slicing with an accurate `total_count`.
#[derive(Default)]
pub struct InMemoryApi {
    contacts: Mutex<Vec<Contact>>,
    companies: Mutex<Vec<CompanyRecord>>,
    users: Mutex<Vec<UserRecord>>,
}

/// Fields the backend's LIKE clause covers.
const SEARCHED_COLUMNS: [ColumnKey; 13] = [
    ColumnKey::FullName,
    ColumnKey::MainCompany,
    ColumnKey::JobTitle,
    ColumnKey::MobilePhone,
    ColumnKey::OfficePhone1,
    ColumnKey::OfficePhone2,
    ColumnKey::OfficePhone3,
    ColumnKey::Email,
    ColumnKey::OfficeEmail,
    ColumnKey::SubjectCategory,
    ColumnKey::Country,
    ColumnKey::Address,
    ColumnKey::Description,
];

impl InMemoryApi {
    pub fn new(contacts: Vec<Contact>, companies: Vec<CompanyRecord>) -> Self {
        InMemoryApi {
            contacts: Mutex::new(contacts),
            companies: Mutex::new(companies),
            users: Mutex::new(Vec::new()),
        }
    }

    pub fn with_users(self, users: Vec<UserRecord>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    fn matching(&self, term: &str, sort: Option<ContactSort>) -> Vec<Contact> {
        let term = term.to_lowercase();
        let mut rows: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|contact| {
                term.is_empty()
                    || SEARCHED_COLUMNS
                        .iter()
                        .any(|key| contact.field(*key).to_lowercase().contains(&term))
            })
            .cloned()
            .collect();

        if let Some(sort) = sort {
            rows.sort_by(|a, b| {
                let ordering = a.field(sort.column).cmp(b.field(sort.column));
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }
}

#[async_trait]
impl DirectoryApi for InMemoryApi {
    async fn list_companies(&self) -> Result<Vec<CompanyRecord>> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn get_company(&self, id: CompanyId) -> Result<CompanyRecord> {
        self.companies
            .lock()
            .unwrap()
            .iter()
            .find(|company| company.id == id)
            .cloned()
            .ok_or(Error::Api {
                status: 404,
                message: "Company not found".to_string(),
            })
    }

    async fn create_company(&self, draft: &CompanyDraft) -> Result<CompanyId> {
        draft.validate()?;
        let mut companies = self.companies.lock().unwrap();
        let id = CompanyId(companies.iter().map(|c| c.id.0).max().unwrap_or(0) + 1);
        companies.push(CompanyRecord {
            id,
            company_name: draft.company_name.clone(),
            sub_company1: draft.sub_company1.clone(),
            sub_company2: draft.sub_company2.clone(),
        });
        Ok(id)
    }

    async fn update_company(&self, id: CompanyId, draft: &CompanyDraft) -> Result<()> {
        draft.validate()?;
        let mut companies = self.companies.lock().unwrap();
        let company = companies
            .iter_mut()
            .find(|company| company.id == id)
            .ok_or(Error::Api {
                status: 404,
                message: "Company not found".to_string(),
            })?;
        company.company_name = draft.company_name.clone();
        company.sub_company1 = draft.sub_company1.clone();
        company.sub_company2 = draft.sub_company2.clone();
        Ok(())
    }

    async fn delete_company(&self, id: CompanyId) -> Result<()> {
        let mut companies = self.companies.lock().unwrap();
        let before = companies.len();
        companies.retain(|company| company.id != id);
        if companies.len() == before {
            return Err(Error::Api {
                status: 404,
                message: "Company not found".to_string(),
            });
        }
        Ok(())
    }

    async fn search_contacts(&self, request: &SearchRequest) -> Result<SearchPage> {
        let rows = self.matching(&request.term, request.sort);
        let total_count = rows.len();
        let contacts = rows
            .into_iter()
            .skip(request.offset)
            .take(request.limit)
            .collect();
        Ok(SearchPage {
            contacts,
            total_count,
            offset: request.offset,
            limit: request.limit,
        })
    }

    async fn search_all(&self, term: &str, sort: Option<ContactSort>) -> Result<Vec<Contact>> {
        Ok(self.matching(term, sort))
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact> {
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
            .ok_or(Error::Api {
                status: 404,
                message: "Contact not found".to_string(),
            })
    }

    async fn create_contact(&self, draft: &ContactDraft) -> Result<ContactId> {
        draft.validate()?;
        let mut contacts = self.contacts.lock().unwrap();
        let id = ContactId(contacts.iter().map(|c| c.id.0).max().unwrap_or(0) + 1);
        contacts.push(crate::fixtures::contact(
            id.0,
            &draft.full_name,
            draft.main_company.as_deref(),
        ));
        Ok(id)
    }

    async fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> Result<()> {
        draft.validate()?;
        let mut contacts = self.contacts.lock().unwrap();
        let contact = contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or(Error::Api {
                status: 404,
                message: "Contact not found".to_string(),
            })?;
        contact.full_name = draft.full_name.clone();
        contact.main_company = draft.main_company.clone();
        Ok(())
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|contact| contact.id != id);
        if contacts.len() == before {
            return Err(Error::Api {
                status: 404,
                message: "Contact not found".to_string(),
            });
        }
        Ok(())
    }

    async fn import_contacts(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<ImportSummary> {
        Err(not_scripted())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserId> {
        draft.validate()?;
        let mut users = self.users.lock().unwrap();
        let id = UserId(users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1);
        users.push(UserRecord {
            id,
            username: draft.username.clone(),
            role: draft.role.clone(),
        });
        Ok(id)
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<()> {
        draft.validate()?;
        let mut users = self.users.lock().unwrap();
        let user = users.iter_mut().find(|user| user.id == id).ok_or(Error::Api {
            status: 404,
            message: "User not found".to_string(),
        })?;
        user.username = draft.username.clone();
        user.role = draft.role.clone();
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(Error::Api {
                status: 404,
                message: "User not found".to_string(),
            });
        }
        Ok(())
    }
}

/// One queued answer for `search_contacts`.
pub enum ScriptedSearch {
    Page { contacts: Vec<Contact>, total_count: usize },
    Fail(String),
}

/// A backend that answers `search_contacts` from a queue and records
/// every request it saw. Deletes succeed unless the id was marked to
/// fail. Everything else reports 501.
#[derive(Default)]
pub struct ScriptedApi {
    searches: Mutex<VecDeque<ScriptedSearch>>,
    requests: Mutex<Vec<SearchRequest>>,
    failing_deletes: Mutex<HashSet<i64>>,
    deleted: Mutex<Vec<ContactId>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, contacts: Vec<Contact>, total_count: usize) {
        self.searches.lock().unwrap().push_back(ScriptedSearch::Page {
            contacts,
            total_count,
        });
    }

    pub fn push_failure(&self, message: &str) {
        self.searches
            .lock()
            .unwrap()
            .push_back(ScriptedSearch::Fail(message.to_string()));
    }

    pub fn fail_delete(&self, id: ContactId) {
        self.failing_deletes.lock().unwrap().insert(id.0);
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Ids deleted so far, in order.
    pub fn deleted(&self) -> Vec<ContactId> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryApi for ScriptedApi {
    async fn list_companies(&self) -> Result<Vec<CompanyRecord>> {
        Err(not_scripted())
    }

    async fn get_company(&self, _id: CompanyId) -> Result<CompanyRecord> {
        Err(not_scripted())
    }

    async fn create_company(&self, _draft: &CompanyDraft) -> Result<CompanyId> {
        Err(not_scripted())
    }

    async fn update_company(&self, _id: CompanyId, _draft: &CompanyDraft) -> Result<()> {
        Err(not_scripted())
    }

    async fn delete_company(&self, _id: CompanyId) -> Result<()> {
        Err(not_scripted())
    }

    async fn search_contacts(&self, request: &SearchRequest) -> Result<SearchPage> {
        self.requests.lock().unwrap().push(request.clone());
        match self.searches.lock().unwrap().pop_front() {
            Some(ScriptedSearch::Page {
                contacts,
                total_count,
            }) => Ok(SearchPage {
                contacts,
                total_count,
                offset: request.offset,
                limit: request.limit,
            }),
            Some(ScriptedSearch::Fail(message)) => Err(Error::Api {
                status: 500,
                message,
            }),
            None => Err(Error::Api {
                status: 500,
                message: "no scripted search response left".to_string(),
            }),
        }
    }

    async fn search_all(&self, _term: &str, _sort: Option<ContactSort>) -> Result<Vec<Contact>> {
        Err(not_scripted())
    }

    async fn get_contact(&self, _id: ContactId) -> Result<Contact> {
        Err(not_scripted())
    }

    async fn create_contact(&self, _draft: &ContactDraft) -> Result<ContactId> {
        Err(not_scripted())
    }

    async fn update_contact(&self, _id: ContactId, _draft: &ContactDraft) -> Result<()> {
        Err(not_scripted())
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        if self.failing_deletes.lock().unwrap().contains(&id.0) {
            return Err(Error::Api {
                status: 500,
                message: format!("delete failed for contact {}", id),
            });
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn import_contacts(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<ImportSummary> {
        Err(not_scripted())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Err(not_scripted())
    }

    async fn create_user(&self, _draft: &UserDraft) -> Result<UserId> {
        Err(not_scripted())
    }

    async fn update_user(&self, _id: UserId, _draft: &UserDraft) -> Result<()> {
        Err(not_scripted())
    }

    async fn delete_user(&self, _id: UserId) -> Result<()> {
        Err(not_scripted())
    }
}
