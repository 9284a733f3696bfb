//! Company hierarchy resolution.
//!
//! The backend stores companies as flat rows (`company_name`,
//! `sub_company1`, `sub_company2`); the two-level nesting encoded in
//! those fields is inferred here into a forest. The forest is rebuilt
//! from scratch on every refresh and replaced atomically; nothing
//! mutates it incrementally.

use crate::compare::folded_cmp;
use rolodex_types::CompanyRecord;
use std::collections::{HashMap, HashSet};

/// One company in the inferred forest. `children` holds child names in
/// display order; resolve them through [`Forest::get`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyNode {
    pub name: String,
    pub children: Vec<String>,
    pub parent: Option<String>,
}

impl CompanyNode {
    fn new(name: &str) -> Self {
        CompanyNode {
            name: name.to_string(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// A node for a name the company list never defined. Companies
    /// referenced only by contacts show up as their own root.
    pub fn standalone(name: &str) -> Self {
        CompanyNode::new(name)
    }
}

/// The inferred company forest: every distinct name is a node, nodes
/// without a parent are roots.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: HashMap<String, CompanyNode>,
}

impl Forest {
    /// Build the forest from flat rows.
    ///
    /// Link rules, applied per record in input order:
    /// - `sub_company1` becomes a child of `company_name` when present
    ///   and different from it;
    /// - `sub_company2` becomes a child of `company_name` when
    ///   `sub_company1` is absent or equal to `company_name`;
    /// - otherwise `sub_company2` becomes a child of `sub_company1`,
    ///   provided it differs from both `sub_company1` and
    ///   `company_name`.
    ///
    /// The first parent a name receives wins; later records cannot
    /// re-parent it. A name is never linked under itself.
    pub fn build(records: &[CompanyRecord]) -> Forest {
        let mut forest = Forest::default();

        for record in records {
            if !record.company_name.is_empty() {
                forest.ensure_node(&record.company_name);
            }
            if let Some(sub1) = record.sub1() {
                forest.ensure_node(sub1);
            }
            if let Some(sub2) = record.sub2() {
                forest.ensure_node(sub2);
            }
        }

        for record in records {
            let main = record.company_name.as_str();
            let sub1 = record.sub1();
            let sub2 = record.sub2();

            if !main.is_empty() {
                if let Some(sub1) = sub1
                    && sub1 != main
                {
                    forest.link(main, sub1);
                }
                if let Some(sub2) = sub2
                    && sub2 != main
                    && sub1.is_none_or(|s| s == main)
                {
                    forest.link(main, sub2);
                }
            }
            if let (Some(sub1), Some(sub2)) = (sub1, sub2)
                && sub1 != main
                && sub2 != sub1
                && sub2 != main
            {
                forest.link(sub1, sub2);
            }
        }

        for node in forest.nodes.values_mut() {
            node.children.sort_by(|a, b| folded_cmp(a, b));
        }

        forest
    }

    fn ensure_node(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            self.nodes.insert(name.to_string(), CompanyNode::new(name));
        }
    }

    /// Attach `child` under `parent` unless the child already has a
    /// parent (first assignment wins) or the link would be a self-loop.
    fn link(&mut self, parent: &str, child: &str) {
        if parent == child || !self.nodes.contains_key(parent) {
            return;
        }
        match self.nodes.get_mut(child) {
            Some(node) if node.parent.is_none() => {
                node.parent = Some(parent.to_string());
            }
            _ => return,
        }
        if let Some(parent_node) = self.nodes.get_mut(parent)
            && !parent_node.children.iter().any(|name| name == child)
        {
            parent_node.children.push(child.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&CompanyNode> {
        self.nodes.get(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root nodes (no parent), in locale order.
    pub fn roots(&self) -> Vec<&CompanyNode> {
        let mut roots: Vec<_> = self
            .nodes
            .values()
            .filter(|node| node.parent.is_none())
            .collect();
        roots.sort_by(|a, b| folded_cmp(&a.name, &b.name));
        roots
    }

    /// Walk parent links from `name` to the ultimate root.
    ///
    /// Unknown names produce a standalone node. Traversal carries a
    /// visited set so a malformed forest (a cycle that slipped past
    /// construction) terminates: revisiting a name counts as having
    /// reached a root.
    pub fn find_root(&self, name: &str) -> CompanyNode {
        let Some(mut node) = self.nodes.get(name) else {
            return CompanyNode::standalone(name);
        };

        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(node.name.as_str());

        while let Some(parent_name) = node.parent.as_deref() {
            match self.nodes.get(parent_name) {
                Some(parent) if visited.insert(parent.name.as_str()) => node = parent,
                _ => break,
            }
        }

        node.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_types::CompanyId;

    fn record(id: i64, main: &str, sub1: Option<&str>, sub2: Option<&str>) -> CompanyRecord {
        CompanyRecord {
            id: CompanyId(id),
            company_name: main.to_string(),
            sub_company1: sub1.map(str::to_string),
            sub_company2: sub2.map(str::to_string),
        }
    }

    #[test]
    fn chain_of_three_links_sub2_under_sub1() {
        let forest = Forest::build(&[record(1, "A", Some("B"), Some("C"))]);

        assert_eq!(forest.get("A").unwrap().children, ["B"]);
        assert_eq!(forest.get("B").unwrap().children, ["C"]);
        assert_eq!(forest.get("B").unwrap().parent.as_deref(), Some("A"));
        assert_eq!(forest.get("C").unwrap().parent.as_deref(), Some("B"));
        assert!(forest.get("C").unwrap().children.is_empty());
    }

    #[test]
    fn sub2_attaches_to_main_when_sub1_is_absent() {
        let forest = Forest::build(&[record(1, "A", None, Some("C"))]);
        assert_eq!(forest.get("A").unwrap().children, ["C"]);
        assert_eq!(forest.get("C").unwrap().parent.as_deref(), Some("A"));
    }

    #[test]
    fn sub2_attaches_to_main_when_sub1_equals_main() {
        let forest = Forest::build(&[record(1, "A", Some("A"), Some("C"))]);
        assert_eq!(forest.get("A").unwrap().children, ["C"]);
        assert!(forest.get("A").unwrap().parent.is_none());
    }

    #[test]
    fn first_parent_assignment_wins() {
        let records = [
            record(1, "A", Some("X"), None),
            record(2, "B", Some("X"), None),
        ];
        let forest = Forest::build(&records);

        assert_eq!(forest.get("X").unwrap().parent.as_deref(), Some("A"));
        assert_eq!(forest.get("A").unwrap().children, ["X"]);
        assert!(forest.get("B").unwrap().children.is_empty());
    }

    #[test]
    fn node_is_never_its_own_child() {
        let records = [
            record(1, "A", Some("A"), None),
            record(2, "B", Some("B"), Some("B")),
        ];
        let forest = Forest::build(&records);

        for name in ["A", "B"] {
            let node = forest.get(name).unwrap();
            assert!(node.parent.is_none());
            assert!(!node.children.iter().any(|child| child == name));
        }
    }

    #[test]
    fn duplicate_links_do_not_duplicate_children() {
        let records = [
            record(1, "A", Some("B"), None),
            record(2, "A", Some("B"), None),
        ];
        let forest = Forest::build(&records);
        assert_eq!(forest.get("A").unwrap().children, ["B"]);
    }

    #[test]
    fn build_is_deterministic() {
        let records = [
            record(1, "هلدینگ البرز", Some("البرز شرق"), Some("پخش البرز")),
            record(2, "گروه صنعتی سپهر", None, Some("سپهر موتور")),
            record(3, "هلدینگ البرز", Some("البرز غرب"), None),
        ];
        let first = Forest::build(&records);
        let second = Forest::build(&records);

        for name in [
            "هلدینگ البرز",
            "البرز شرق",
            "پخش البرز",
            "گروه صنعتی سپهر",
            "سپهر موتور",
            "البرز غرب",
        ] {
            assert_eq!(first.get(name), second.get(name), "node {name} differs");
        }
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn children_are_locale_sorted() {
        let records = [
            record(1, "Root", Some("beta"), None),
            record(2, "Root", Some("Alpha"), None),
            record(3, "Root", Some("émile"), None),
        ];
        let forest = Forest::build(&records);
        assert_eq!(forest.get("Root").unwrap().children, ["Alpha", "beta", "émile"]);
    }

    #[test]
    fn find_root_walks_to_the_top() {
        let forest = Forest::build(&[record(1, "A", Some("B"), Some("C"))]);
        assert_eq!(forest.find_root("C").name, "A");
        assert_eq!(forest.find_root("B").name, "A");
        assert_eq!(forest.find_root("A").name, "A");
    }

    #[test]
    fn find_root_on_unknown_name_returns_standalone_node() {
        let forest = Forest::build(&[record(1, "A", None, None)]);
        let ghost = forest.find_root("Ghost Co");
        assert_eq!(ghost.name, "Ghost Co");
        assert!(ghost.children.is_empty());
        assert!(ghost.parent.is_none());
    }

    #[test]
    fn find_root_terminates_on_an_artificial_cycle() {
        let mut forest = Forest::build(&[record(1, "A", Some("B"), None)]);
        // Corrupt the forest: A's parent points back down at B.
        forest.nodes.get_mut("A").unwrap().parent = Some("B".to_string());

        let root = forest.find_root("B");
        assert!(["A", "B"].contains(&root.name.as_str()));
    }

    #[test]
    fn mutual_parent_claims_terminate() {
        // Record 2 makes A a child of B after record 1 made B a child
        // of A: construction allows it (A had no parent yet), find_root
        // must still stop.
        let records = [
            record(1, "A", Some("B"), None),
            record(2, "B", Some("A"), None),
        ];
        let forest = Forest::build(&records);
        let _ = forest.find_root("A");
        let _ = forest.find_root("B");
    }

    #[test]
    fn empty_sub_fields_create_no_nodes() {
        let forest = Forest::build(&[record(1, "A", Some(""), Some(""))]);
        assert_eq!(forest.len(), 1);
    }
}
