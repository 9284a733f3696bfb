//! Presentation adapter: projects list state, visibility and the
//! company forest into render-ready view models. The rendering layer
//! (CLI formatters here, a browser table originally) consumes these
//! without touching engine state.

use crate::columns::ColumnVisibility;
use crate::compare::folded_cmp;
use crate::hierarchy::Forest;
use rolodex_types::{ALL_COLUMNS, ColumnKey, Contact, ContactId};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeaderView {
    pub key: ColumnKey,
    pub label: &'static str,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub key: ColumnKey,
    pub value: String,
    pub visible: bool,
    pub phone: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub id: ContactId,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnHeaderView>,
    pub rows: Vec<RowView>,
}

/// Project contacts into a table view model. Every cell is emitted in
/// canonical column order and carries its own visibility flag; hiding
/// a column never drops the data.
pub fn table_view(contacts: &[Contact], visibility: &ColumnVisibility) -> TableView {
    let columns = ALL_COLUMNS
        .iter()
        .map(|key| ColumnHeaderView {
            key: *key,
            label: key.label(),
            visible: visibility.get(*key),
        })
        .collect();

    let rows = contacts
        .iter()
        .map(|contact| RowView {
            id: contact.id,
            cells: ALL_COLUMNS
                .iter()
                .map(|key| CellView {
                    key: *key,
                    value: contact.field(*key).to_string(),
                    visible: visibility.get(*key),
                    phone: key.is_phone(),
                })
                .collect(),
        })
        .collect();

    TableView { columns, rows }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNodeView {
    pub name: String,
    pub highlighted: bool,
    pub children: Vec<TreeNodeView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeView {
    pub root: TreeNodeView,
}

/// Build the company tree for a selected contact: find the ultimate
/// root of the contact's main company, then walk down depth-first,
/// highlighting the contact's own company.
///
/// Returns `None` (tree hidden) when the contact has no main company
/// or no company data is loaded.
pub fn company_tree(forest: &Forest, contact: &Contact) -> Option<TreeView> {
    tree_for_company(forest, contact.main_company())
}

/// Tree view model for a named company: rooted at its ultimate parent,
/// with the named company highlighted.
pub fn tree_for_company(forest: &Forest, name: &str) -> Option<TreeView> {
    if name.is_empty() || forest.is_empty() {
        return None;
    }

    let root = forest.find_root(name);
    let mut visited = HashSet::new();
    let root_view = build_node(forest, &root.name, name, &mut visited);
    Some(TreeView { root: root_view })
}

fn build_node(
    forest: &Forest,
    name: &str,
    highlight: &str,
    visited: &mut HashSet<String>,
) -> TreeNodeView {
    visited.insert(name.to_string());

    // Children re-sorted at render time as well; the builder already
    // sorts, but synthetic roots and corrupted parents bypass it.
    let mut child_names: Vec<&str> = forest
        .get(name)
        .map(|node| {
            node.children
                .iter()
                .map(String::as_str)
                .filter(|child| !visited.contains(*child))
                .collect()
        })
        .unwrap_or_default();
    child_names.sort_by(|a, b| folded_cmp(a, b));

    let children = child_names
        .into_iter()
        .map(|child| build_node(forest, child, highlight, visited))
        .collect();

    TreeNodeView {
        name: name.to_string(),
        highlighted: name == highlight,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_types::{CompanyId, CompanyRecord};

    fn contact_with_company(company: Option<&str>) -> Contact {
        let mut value = serde_json::json!({ "id": 1, "full_name": "مریم کاظمی" });
        if let Some(company) = company {
            value["main_company"] = serde_json::Value::String(company.to_string());
        }
        serde_json::from_value(value).unwrap()
    }

    fn record(id: i64, main: &str, sub1: Option<&str>, sub2: Option<&str>) -> CompanyRecord {
        CompanyRecord {
            id: CompanyId(id),
            company_name: main.to_string(),
            sub_company1: sub1.map(str::to_string),
            sub_company2: sub2.map(str::to_string),
        }
    }

    #[test]
    fn table_cells_carry_visibility_flags() {
        let mut visibility = ColumnVisibility::default();
        visibility.set(ColumnKey::Email, false);

        let contact = contact_with_company(Some("A"));
        let table = table_view(std::slice::from_ref(&contact), &visibility);

        assert_eq!(table.rows.len(), 1);
        let cells = &table.rows[0].cells;
        assert_eq!(cells.len(), ALL_COLUMNS.len());

        let email = cells.iter().find(|c| c.key == ColumnKey::Email).unwrap();
        assert!(!email.visible);
        let name = cells.iter().find(|c| c.key == ColumnKey::FullName).unwrap();
        assert!(name.visible);
        assert_eq!(name.value, "مریم کاظمی");

        let mobile = cells.iter().find(|c| c.key == ColumnKey::MobilePhone).unwrap();
        assert!(mobile.phone);
    }

    #[test]
    fn tree_starts_at_root_and_highlights_contact_company() {
        let forest = Forest::build(&[record(1, "A", Some("B"), Some("C"))]);
        let contact = contact_with_company(Some("C"));

        let tree = company_tree(&forest, &contact).unwrap();
        assert_eq!(tree.root.name, "A");
        assert!(!tree.root.highlighted);

        let b = &tree.root.children[0];
        assert_eq!(b.name, "B");
        let c = &b.children[0];
        assert_eq!(c.name, "C");
        assert!(c.highlighted);
        assert!(c.children.is_empty());
    }

    #[test]
    fn unknown_company_renders_as_single_highlighted_root() {
        let forest = Forest::build(&[record(1, "A", None, None)]);
        let contact = contact_with_company(Some("Ghost Co"));

        let tree = company_tree(&forest, &contact).unwrap();
        assert_eq!(tree.root.name, "Ghost Co");
        assert!(tree.root.highlighted);
        assert!(tree.root.children.is_empty());
    }

    #[test]
    fn no_tree_without_company_or_data() {
        let forest = Forest::build(&[record(1, "A", None, None)]);
        assert!(company_tree(&forest, &contact_with_company(None)).is_none());
        assert!(company_tree(&forest, &contact_with_company(Some(""))).is_none());

        let empty = Forest::default();
        assert!(company_tree(&empty, &contact_with_company(Some("A"))).is_none());
    }

    #[test]
    fn sibling_order_is_locale_folded() {
        let records = [
            record(1, "Root", Some("zeta"), None),
            record(2, "Root", Some("Émile"), None),
            record(3, "Root", Some("delta"), None),
        ];
        let forest = Forest::build(&records);
        let contact = contact_with_company(Some("Root"));

        let tree = company_tree(&forest, &contact).unwrap();
        let names: Vec<_> = tree.root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["delta", "Émile", "zeta"]);
    }
}
