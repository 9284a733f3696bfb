use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rolodex_engine::view::{TreeNodeView, TreeView};
use std::fmt;

/// Text rendering of a company tree view model, one node per line,
/// the selected company marked.
pub struct TreeText<'a> {
    view: &'a TreeView,
    color: bool,
}

impl<'a> TreeText<'a> {
    pub fn new(view: &'a TreeView) -> Self {
        TreeText {
            view,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &TreeNodeView,
        depth: usize,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let marker = if depth == 0 { "" } else { "└ " };

        if node.highlighted {
            if self.color {
                writeln!(f, "{}{}{} ◀", indent, marker, node.name.yellow().bold())?;
            } else {
                writeln!(f, "{}{}{} ◀", indent, marker, node.name)?;
            }
        } else {
            writeln!(f, "{}{}{}", indent, marker, node.name)?;
        }

        for child in &node.children {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, &self.view.root, 0)
    }
}
