//! Company data: fetch, forest rebuild, sorted listing.

use crate::error::Result;
use log::info;
use rolodex_client::api::DirectoryApi;
use rolodex_engine::hierarchy::{CompanyNode, Forest};
use rolodex_engine::list::{CompanyField, CompanySort, sort_companies};
use rolodex_engine::view::{TreeView, company_tree};
use rolodex_types::{CompanyRecord, Contact};

/// Snapshot of the company list plus the forest inferred from it.
///
/// `refresh` replaces both atomically: a failed fetch leaves the
/// previous snapshot in place.
#[derive(Debug, Default)]
pub struct CompanyDirectory {
    companies: Vec<CompanyRecord>,
    forest: Forest,
    sort: Option<CompanySort>,
}

impl CompanyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch the company list and rebuild the forest from scratch.
    pub async fn refresh<A: DirectoryApi>(&mut self, api: &A) -> Result<()> {
        let companies = api.list_companies().await?;
        info!("refreshed company directory: {} rows", companies.len());
        self.forest = Forest::build(&companies);
        self.companies = companies;
        Ok(())
    }

    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    /// The company rows under the current sort order; fetch order when
    /// no column was selected.
    pub fn sorted_companies(&self) -> Vec<CompanyRecord> {
        let mut rows = self.companies.clone();
        if let Some(sort) = self.sort {
            sort_companies(&mut rows, sort);
        }
        rows
    }

    /// Select a sort column: same column flips direction, a new column
    /// starts ascending.
    pub fn toggle_sort(&mut self, field: CompanyField) -> CompanySort {
        let sort = CompanySort::toggle(self.sort, field);
        self.sort = Some(sort);
        sort
    }

    pub fn sort(&self) -> Option<CompanySort> {
        self.sort
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn find_root(&self, name: &str) -> CompanyNode {
        self.forest.find_root(name)
    }

    /// Tree view model for a contact's company, if one can be shown.
    pub fn tree_for(&self, contact: &Contact) -> Option<TreeView> {
        company_tree(&self.forest, contact)
    }
}
