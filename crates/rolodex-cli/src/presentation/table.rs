use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rolodex_engine::view::TableView;
use std::fmt;

/// Text rendering of a contact table view model. Hidden columns are
/// skipped entirely; the view model still carries them for JSON
/// output.
pub struct TableText<'a> {
    view: &'a TableView,
    color: bool,
}

impl<'a> TableText<'a> {
    pub fn new(view: &'a TableView) -> Self {
        TableText {
            view,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.view
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.visible)
            .map(|(index, column)| {
                let mut width = column.label.chars().count();
                for row in &self.view.rows {
                    width = width.max(row.cells[index].value.chars().count());
                }
                width
            })
            .collect()
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}

impl fmt::Display for TableText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        let header: Vec<String> = self
            .view
            .columns
            .iter()
            .filter(|column| column.visible)
            .zip(&widths)
            .map(|(column, width)| pad(column.label, *width))
            .collect();
        let header = header.join("  ");
        if self.color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        for row in &self.view.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .filter(|cell| cell.visible)
                .zip(&widths)
                .map(|(cell, width)| pad(&cell.value, *width))
                .collect();
            writeln!(f, "{}", cells.join("  "))?;
        }

        Ok(())
    }
}
