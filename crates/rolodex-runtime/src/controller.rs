//! Drives the paged contact list against a [`DirectoryApi`].
//!
//! The controller owns a [`ListState`] and translates its page
//! requests into search calls. Responses are fed back through the
//! state's generation check, so a response that arrives after the
//! query changed is dropped instead of corrupting the new result set.

use crate::error::Result;
use log::debug;
use rolodex_client::api::{DirectoryApi, SearchRequest};
use rolodex_engine::list::{ListState, PageOutcome, PageRequest};
use rolodex_types::{Contact, ContactSort};
use std::sync::Arc;

/// Suggestion queries use a small fixed page.
pub const SUGGEST_LIMIT: usize = 10;

/// Minimum search-term length before suggestions fire.
pub const MIN_SUGGEST_CHARS: usize = 2;

/// What a fetch call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was merged into the list.
    Fetched { appended: usize, total_count: usize },
    /// Nothing to do: a fetch is in flight or the list is complete.
    Idle,
    /// The response belonged to a superseded query and was dropped.
    Discarded,
}

pub struct ListController<A: DirectoryApi> {
    api: Arc<A>,
    state: ListState,
}

impl<A: DirectoryApi> ListController<A> {
    pub fn new(api: Arc<A>) -> Self {
        ListController {
            api,
            state: ListState::default(),
        }
    }

    pub fn with_page_size(api: Arc<A>, page_size: usize) -> Self {
        ListController {
            api,
            state: ListState::new(page_size),
        }
    }

    /// Reset to a new `(term, sort)` query and fetch its first page.
    pub async fn start_query(
        &mut self,
        term: &str,
        sort: Option<ContactSort>,
    ) -> Result<FetchOutcome> {
        let request = self.state.begin_query(term, sort);
        self.dispatch(request).await
    }

    /// Fetch the next page of the current query. A no-op while a fetch
    /// is in flight or when the result set is complete.
    pub async fn fetch_next_page(&mut self) -> Result<FetchOutcome> {
        match self.state.next_page_request() {
            Some(request) => self.dispatch(request).await,
            None => Ok(FetchOutcome::Idle),
        }
    }

    async fn dispatch(&mut self, request: PageRequest) -> Result<FetchOutcome> {
        debug!(
            "fetching contacts page term={:?} offset={} gen={}",
            request.term, request.offset, request.generation
        );
        let search = SearchRequest {
            term: request.term.clone(),
            offset: request.offset,
            limit: request.limit,
            sort: request.sort,
        };

        match self.api.search_contacts(&search).await {
            Ok(page) => {
                match self
                    .state
                    .apply_page(&request, page.contacts, page.total_count)
                {
                    PageOutcome::Applied {
                        appended,
                        total_count,
                    } => Ok(FetchOutcome::Fetched {
                        appended,
                        total_count,
                    }),
                    _ => Ok(FetchOutcome::Discarded),
                }
            }
            Err(err) => {
                if self.state.apply_failure(&request) == PageOutcome::Discarded {
                    return Ok(FetchOutcome::Discarded);
                }
                Err(err.into())
            }
        }
    }

    /// Autosuggest lookup: a lightweight query independent of the main
    /// list. Terms shorter than [`MIN_SUGGEST_CHARS`] return nothing,
    /// and the list state is never touched.
    pub async fn suggest(&self, term: &str) -> Result<Vec<Contact>> {
        let term = term.trim();
        if term.chars().count() < MIN_SUGGEST_CHARS {
            return Ok(Vec::new());
        }

        let page = self
            .api
            .search_contacts(&SearchRequest {
                term: term.to_string(),
                offset: 0,
                limit: SUGGEST_LIMIT,
                sort: None,
            })
            .await?;
        Ok(page.contacts)
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[Contact] {
        self.state.items()
    }
}
