use crate::types::{Direction, OutputFormat, VisibilityState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Browse and manage a contacts/companies directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory for config and persisted preferences
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Directory service base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },

    Companies {
        #[command(subcommand)]
        command: CompaniesCommand,
    },

    Columns {
        #[command(subcommand)]
        command: ColumnsCommand,
    },

    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
}

#[derive(Subcommand)]
pub enum ContactsCommand {
    /// Search the directory and page through the results
    Search {
        #[arg(default_value = "")]
        term: String,

        /// Column to sort by (wire key, e.g. full_name)
        #[arg(long)]
        sort_by: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: Direction,

        /// How many result pages to fetch
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Autosuggest lookup for a partial name
    Suggest { term: String },

    /// Show one contact, with its company tree
    Show { id: i64 },

    /// Create a contact
    Add {
        full_name: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        job_title: Option<String>,

        #[arg(long)]
        mobile: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Update fields of an existing contact
    Edit {
        id: i64,

        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        job_title: Option<String>,

        #[arg(long)]
        mobile: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete contacts by id, reporting per-row outcomes
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },

    /// Export contacts matching a search to a spreadsheet
    Export {
        #[arg(long, default_value = "contacts.csv")]
        output: PathBuf,

        #[arg(long, default_value = "")]
        term: String,

        #[arg(long)]
        sort_by: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: Direction,
    },

    /// Validate a spreadsheet locally and upload it for import
    Import { file: PathBuf },
}

#[derive(Subcommand)]
pub enum CompaniesCommand {
    /// List company rows
    List {
        /// Field to sort by (company_name, sub_company1, sub_company2, id)
        #[arg(long)]
        sort_by: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: Direction,
    },

    /// Render the hierarchy tree containing a company
    Tree { name: String },

    /// Show one company row
    Show { id: i64 },

    /// Create a company row
    Add {
        name: String,

        #[arg(long)]
        sub1: Option<String>,

        #[arg(long)]
        sub2: Option<String>,
    },

    /// Update a company row
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        sub1: Option<String>,

        #[arg(long)]
        sub2: Option<String>,
    },

    /// Delete a company row
    Remove { id: i64 },
}

#[derive(Subcommand)]
pub enum ColumnsCommand {
    /// Show the current column visibility
    Show,

    /// Turn one column on or off
    Set {
        /// Column wire key, e.g. email
        column: String,

        state: VisibilityState,
    },

    /// Turn every togglable column on or off
    All { state: VisibilityState },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    List,

    Add {
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value = "normal")]
        role: String,
    },

    Remove { id: i64 },
}
