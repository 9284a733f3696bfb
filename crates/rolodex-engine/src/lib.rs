// Engine module - pure directory logic (hierarchy, list state, view models)
// This layer sits between wire records (types) and the runtime/CLI layers.
// No I/O happens here; everything is a function of its inputs.

pub mod columns;
pub mod compare;
pub mod hierarchy;
pub mod list;
pub mod view;

pub use columns::ColumnVisibility;
pub use compare::folded_cmp;
pub use hierarchy::{CompanyNode, Forest};
pub use list::{
    CompanyField, CompanySort, DEFAULT_PAGE_SIZE, ListState, PageOutcome, PageRequest,
    sort_companies,
};
pub use view::{
    CellView, ColumnHeaderView, RowView, TableView, TreeNodeView, TreeView, company_tree,
    table_view, tree_for_company,
};
