//! Paged contact list state.
//!
//! [`ListState`] is a reducer: callers ask it for page requests, run
//! them against the search endpoint, and feed the responses back in.
//! The state never talks to the network itself, which keeps every
//! transition unit-testable.
//!
//! A generation counter guards against stale responses: starting a new
//! query bumps it, and a response carrying an older generation is
//! discarded instead of being merged into the new result set.

use crate::compare::folded_cmp;
use rolodex_types::{CompanyRecord, Contact, ContactSort, SortDirection};

/// Rows fetched per page, matching the original table's scroll chunk.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One fetch the caller should run against the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub term: String,
    pub sort: Option<ContactSort>,
    pub offset: usize,
    pub limit: usize,
}

/// What applying a response did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Rows merged; `appended` counts rows added by this page.
    Applied { appended: usize, total_count: usize },
    /// A fetch failed; automatic loading stops until a new query.
    Halted,
    /// The response belonged to a superseded query and was dropped.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ListState {
    items: Vec<Contact>,
    page: usize,
    page_size: usize,
    has_more: bool,
    term: String,
    sort: Option<ContactSort>,
    is_loading: bool,
    generation: u64,
}

impl Default for ListState {
    fn default() -> Self {
        ListState::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        ListState {
            items: Vec::new(),
            page: 0,
            page_size,
            has_more: true,
            term: String::new(),
            sort: None,
            is_loading: false,
            generation: 0,
        }
    }

    /// Start a new query: reset the result set atomically, supersede
    /// any in-flight fetch, and return the first page request.
    ///
    /// The search term is trimmed and lowercased here so every entry
    /// point normalizes the same way.
    pub fn begin_query(&mut self, term: &str, sort: Option<ContactSort>) -> PageRequest {
        self.items.clear();
        self.page = 0;
        self.has_more = true;
        self.term = term.trim().to_lowercase();
        self.sort = sort;
        self.is_loading = true;
        self.generation += 1;
        self.request(0)
    }

    /// Next page of the current query, or `None` while a fetch is in
    /// flight or the result set is complete.
    pub fn next_page_request(&mut self) -> Option<PageRequest> {
        if self.is_loading || !self.has_more {
            return None;
        }
        self.is_loading = true;
        Some(self.request(self.page * self.page_size))
    }

    fn request(&self, offset: usize) -> PageRequest {
        PageRequest {
            generation: self.generation,
            term: self.term.clone(),
            sort: self.sort,
            offset,
            limit: self.page_size,
        }
    }

    /// Merge a successful response. An offset-0 page replaces the
    /// result set, any other page appends. The page counter advances
    /// once per applied fetch regardless of how many rows came back;
    /// the search endpoint's offset contract counts pages, not rows.
    pub fn apply_page(
        &mut self,
        request: &PageRequest,
        contacts: Vec<Contact>,
        total_count: usize,
    ) -> PageOutcome {
        if request.generation != self.generation {
            return PageOutcome::Discarded;
        }

        let appended = contacts.len();
        if request.offset == 0 {
            self.items = contacts;
        } else {
            self.items.extend(contacts);
        }
        self.has_more = self.items.len() < total_count;
        self.page += 1;
        self.is_loading = false;

        PageOutcome::Applied {
            appended,
            total_count,
        }
    }

    /// Record a failed fetch: keep the rows we have, stop loading more.
    pub fn apply_failure(&mut self, request: &PageRequest) -> PageOutcome {
        if request.generation != self.generation {
            return PageOutcome::Discarded;
        }
        self.is_loading = false;
        self.has_more = false;
        PageOutcome::Halted
    }

    pub fn items(&self) -> &[Contact] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn sort(&self) -> Option<ContactSort> {
        self.sort
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Sortable fields of the company list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Id,
    CompanyName,
    SubCompany1,
    SubCompany2,
}

impl CompanyField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyField::Id => "id",
            CompanyField::CompanyName => "company_name",
            CompanyField::SubCompany1 => "sub_company1",
            CompanyField::SubCompany2 => "sub_company2",
        }
    }
}

impl std::str::FromStr for CompanyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(CompanyField::Id),
            "company_name" => Ok(CompanyField::CompanyName),
            "sub_company1" => Ok(CompanyField::SubCompany1),
            "sub_company2" => Ok(CompanyField::SubCompany2),
            other => Err(format!("unknown company field: {}", other)),
        }
    }
}

/// Client-side sort order for the (unpaginated) company list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanySort {
    pub field: CompanyField,
    pub direction: SortDirection,
}

impl CompanySort {
    /// Selecting a column again flips its direction; selecting a new
    /// column starts ascending.
    pub fn toggle(current: Option<CompanySort>, field: CompanyField) -> CompanySort {
        match current {
            Some(sort) if sort.field == field => CompanySort {
                field,
                direction: sort.direction.flipped(),
            },
            _ => CompanySort {
                field,
                direction: SortDirection::Asc,
            },
        }
    }
}

/// Stable in-place sort of company rows. Textual fields compare with
/// the locale folding; `id` compares numerically.
pub fn sort_companies(records: &mut [CompanyRecord], sort: CompanySort) {
    records.sort_by(|a, b| {
        let ordering = match sort.field {
            CompanyField::Id => a.id.cmp(&b.id),
            CompanyField::CompanyName => folded_cmp(&a.company_name, &b.company_name),
            CompanyField::SubCompany1 => {
                folded_cmp(a.sub1().unwrap_or(""), b.sub1().unwrap_or(""))
            }
            CompanyField::SubCompany2 => {
                folded_cmp(a.sub2().unwrap_or(""), b.sub2().unwrap_or(""))
            }
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_types::{ColumnKey, CompanyId};

    fn contact(id: i64, name: &str) -> Contact {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "full_name": name,
        }))
        .unwrap()
    }

    fn contacts(range: std::ops::Range<i64>) -> Vec<Contact> {
        range.map(|i| contact(i, &format!("c{}", i))).collect()
    }

    #[test]
    fn begin_query_resets_and_normalizes() {
        let mut state = ListState::new(50);
        let first = state.begin_query("x", None);
        state.apply_page(&first, contacts(0..50), 200);
        assert_eq!(state.items().len(), 50);

        let request = state.begin_query("  ALI ", Some(ContactSort::asc(ColumnKey::FullName)));
        assert_eq!(request.term, "ali");
        assert_eq!(request.offset, 0);
        assert!(state.items().is_empty());
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn next_page_blocked_while_loading() {
        let mut state = ListState::new(50);
        let _first = state.begin_query("", None);
        // First fetch still in flight.
        assert!(state.next_page_request().is_none());
    }

    #[test]
    fn items_grow_monotonically_until_total_reached() {
        let mut state = ListState::new(50);
        let mut request = state.begin_query("ali", None);
        let total = 120;

        let mut fetched = 0;
        loop {
            let rows = contacts(fetched..(fetched + 50).min(total));
            fetched = (fetched + 50).min(total);
            let before = state.items().len();
            state.apply_page(&request, rows, total as usize);
            assert!(state.items().len() >= before);

            match state.next_page_request() {
                Some(next) => request = next,
                None => break,
            }
        }

        assert_eq!(state.items().len(), 120);
        assert!(!state.has_more());
        assert!(state.next_page_request().is_none());
    }

    #[test]
    fn short_page_still_advances_offset_by_one_page() {
        let mut state = ListState::new(50);
        let first = state.begin_query("", None);
        // Backend returned fewer rows than a full page but reports a
        // larger total; the next request still starts at page 1.
        state.apply_page(&first, contacts(0..30), 80);
        let next = state.next_page_request().unwrap();
        assert_eq!(next.offset, 50);
    }

    #[test]
    fn failure_halts_without_dropping_rows() {
        let mut state = ListState::new(50);
        let first = state.begin_query("", None);
        state.apply_page(&first, contacts(0..50), 150);

        let second = state.next_page_request().unwrap();
        assert_eq!(state.apply_failure(&second), PageOutcome::Halted);
        assert_eq!(state.items().len(), 50);
        assert!(!state.has_more());
        assert!(state.next_page_request().is_none());
    }

    #[test]
    fn stale_page_is_discarded() {
        let mut state = ListState::new(50);
        let old = state.begin_query("old", None);
        let new = state.begin_query("new", None);

        assert_eq!(
            state.apply_page(&old, contacts(0..50), 500),
            PageOutcome::Discarded
        );
        assert!(state.items().is_empty());
        // The new query's first fetch is still pending.
        assert!(state.is_loading());

        state.apply_page(&new, contacts(0..10), 10);
        assert_eq!(state.items().len(), 10);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut state = ListState::new(50);
        let old = state.begin_query("old", None);
        let _new = state.begin_query("new", None);

        assert_eq!(state.apply_failure(&old), PageOutcome::Discarded);
        assert!(state.has_more());
    }

    fn company(id: i64, name: &str, sub1: Option<&str>) -> CompanyRecord {
        CompanyRecord {
            id: CompanyId(id),
            company_name: name.to_string(),
            sub_company1: sub1.map(str::to_string),
            sub_company2: None,
        }
    }

    #[test]
    fn company_sort_toggles_direction_on_same_field() {
        let first = CompanySort::toggle(None, CompanyField::CompanyName);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = CompanySort::toggle(Some(first), CompanyField::CompanyName);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = CompanySort::toggle(Some(second), CompanyField::SubCompany1);
        assert_eq!(third.field, CompanyField::SubCompany1);
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn companies_sort_locale_aware_and_by_id() {
        let mut rows = vec![
            company(3, "gamma", None),
            company(1, "Álpha", None),
            company(2, "BETA", None),
        ];
        sort_companies(
            &mut rows,
            CompanySort {
                field: CompanyField::CompanyName,
                direction: SortDirection::Asc,
            },
        );
        // Neither the accent nor the casing dominates the order.
        assert_eq!(rows[0].company_name, "Álpha");
        assert_eq!(rows[1].company_name, "BETA");
        assert_eq!(rows[2].company_name, "gamma");

        sort_companies(
            &mut rows,
            CompanySort {
                field: CompanyField::Id,
                direction: SortDirection::Desc,
            },
        );
        let ids: Vec<_> = rows.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, [3, 2, 1]);
    }
}
