//! reqwest implementation of [`DirectoryApi`].

use crate::api::{DirectoryApi, ImportSummary, SearchPage, SearchRequest};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::multipart;
use rolodex_types::{
    CompanyDraft, CompanyId, CompanyRecord, Contact, ContactDraft, ContactId, ContactSort, UserDraft,
    UserId, UserRecord,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Structured error body some endpoints attach to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Responses of create endpoints carry the new row id.
#[derive(Debug, Deserialize)]
struct CreatedBody {
    id: i64,
}

pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder().build()?;
        Ok(HttpApi { base_url, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response, turning non-2xx into [`Error::Api`] with the
    /// server's `{error}` message when one was sent.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        warn!("api error {} on request: {}", status.as_u16(), message);
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Like [`Self::decode`] but for endpoints whose success body we
    /// ignore (update/delete acknowledgements).
    async fn check(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn search_query(request: &SearchRequest) -> Vec<(&'static str, String)> {
        let (sort_by, sort_direction) = sort_params(request.sort);
        vec![
            ("term", request.term.clone()),
            ("offset", request.offset.to_string()),
            ("limit", request.limit.to_string()),
            ("sort_by", sort_by),
            ("sort_direction", sort_direction),
        ]
    }
}

/// `sort_by` is sent as an empty string when no sort is active; the
/// backend treats anything outside its column whitelist as unsorted.
fn sort_params(sort: Option<ContactSort>) -> (String, String) {
    match sort {
        Some(sort) => (
            sort.column.as_str().to_string(),
            sort.direction.to_string(),
        ),
        None => (String::new(), "asc".to_string()),
    }
}

#[async_trait]
impl DirectoryApi for HttpApi {
    async fn list_companies(&self) -> Result<Vec<CompanyRecord>> {
        let response = self.http.get(self.url("/api/companies")).send().await?;
        Self::decode(response).await
    }

    async fn get_company(&self, id: CompanyId) -> Result<CompanyRecord> {
        let response = self
            .http
            .get(self.url(&format!("/api/companies/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_company(&self, draft: &CompanyDraft) -> Result<CompanyId> {
        draft.validate()?;
        let response = self
            .http
            .post(self.url("/api/companies"))
            .json(draft)
            .send()
            .await?;
        let created: CreatedBody = Self::decode(response).await?;
        Ok(CompanyId(created.id))
    }

    async fn update_company(&self, id: CompanyId, draft: &CompanyDraft) -> Result<()> {
        draft.validate()?;
        let response = self
            .http
            .put(self.url(&format!("/api/companies/{}", id)))
            .json(draft)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn delete_company(&self, id: CompanyId) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/companies/{}", id)))
            .send()
            .await?;
        Self::check(response).await
    }

    async fn search_contacts(&self, request: &SearchRequest) -> Result<SearchPage> {
        debug!(
            "searching contacts term={:?} offset={} limit={}",
            request.term, request.offset, request.limit
        );
        let response = self
            .http
            .get(self.url("/api/contacts/search"))
            .query(&Self::search_query(request))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn search_all(&self, term: &str, sort: Option<ContactSort>) -> Result<Vec<Contact>> {
        let (sort_by, sort_direction) = sort_params(sort);
        let response = self
            .http
            .get(self.url("/api/contacts/search"))
            .query(&[
                ("term", term.to_string()),
                ("sort_by", sort_by),
                ("sort_direction", sort_direction),
                ("export_all", "true".to_string()),
            ])
            .send()
            .await?;
        let page: SearchPage = Self::decode(response).await?;
        Ok(page.contacts)
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact> {
        let response = self
            .http
            .get(self.url(&format!("/api/contacts/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create_contact(&self, draft: &ContactDraft) -> Result<ContactId> {
        draft.validate()?;
        let response = self
            .http
            .post(self.url("/api/contacts"))
            .json(draft)
            .send()
            .await?;
        let created: CreatedBody = Self::decode(response).await?;
        Ok(ContactId(created.id))
    }

    async fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> Result<()> {
        draft.validate()?;
        let response = self
            .http
            .put(self.url(&format!("/api/contacts/{}", id)))
            .json(draft)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/contacts/{}", id)))
            .send()
            .await?;
        Self::check(response).await
    }

    async fn import_contacts(&self, file_name: &str, bytes: Vec<u8>) -> Result<ImportSummary> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        let response = self
            .http
            .post(self.url("/api/contacts/import"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let response = self.http.get(self.url("/api/users")).send().await?;
        Self::decode(response).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserId> {
        draft.validate()?;
        let response = self
            .http
            .post(self.url("/api/users"))
            .json(draft)
            .send()
            .await?;
        let created: CreatedBody = Self::decode(response).await?;
        Ok(UserId(created.id))
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<()> {
        draft.validate()?;
        let response = self
            .http
            .put(self.url(&format!("/api/users/{}", id)))
            .json(draft)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/users/{}", id)))
            .send()
            .await?;
        Self::check(response).await
    }
}
