mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, ColumnsCommand, Commands, CompaniesCommand, ContactsCommand, UsersCommand};
pub use commands::run;
