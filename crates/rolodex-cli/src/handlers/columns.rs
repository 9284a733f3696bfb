use crate::args::ColumnsCommand;
use crate::types::OutputFormat;
use anyhow::{Context as _, Result};
use rolodex_runtime::ColumnPrefs;
use rolodex_types::{ALL_COLUMNS, ColumnKey};
use std::path::Path;

pub fn handle(data_dir: &Path, command: &ColumnsCommand, format: OutputFormat) -> Result<()> {
    let mut prefs = ColumnPrefs::load(data_dir);

    match command {
        ColumnsCommand::Show => {
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(prefs.visibility())?)
                }
                OutputFormat::Plain => {
                    for key in ALL_COLUMNS {
                        let state = if prefs.get(key) { "on" } else { "off" };
                        let pinned = if key.is_pinned() { " (pinned)" } else { "" };
                        println!("{:<24} {}{}", key.as_str(), state, pinned);
                    }
                    let summary = if prefs.is_indeterminate() {
                        "mixed"
                    } else if prefs.visibility().all_visible() {
                        "all on"
                    } else {
                        "all off"
                    };
                    println!("togglable columns: {}", summary);
                }
            }
            Ok(())
        }

        ColumnsCommand::Set { column, state } => {
            let key: ColumnKey = column
                .parse()
                .map_err(|err: String| anyhow::anyhow!(err))
                .context("invalid column")?;
            if key.is_pinned() {
                println!("{} is always visible", key.as_str());
                return Ok(());
            }
            prefs.set(key, state.as_bool())?;
            println!(
                "{} is now {}",
                key.as_str(),
                if state.as_bool() { "on" } else { "off" }
            );
            Ok(())
        }

        ColumnsCommand::All { state } => {
            prefs.toggle_all(state.as_bool())?;
            println!(
                "togglable columns are now {}",
                if state.as_bool() { "on" } else { "off" }
            );
            Ok(())
        }
    }
}
