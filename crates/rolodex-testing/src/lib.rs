//! Testing infrastructure for the rolodex workspace.
//!
//! - `fixtures`: sample contacts and company rows
//! - `api`: `DirectoryApi` doubles: an in-memory backend and a
//!   scripted one for driving pagination/failure sequences

pub mod api;
pub mod fixtures;

pub use api::{InMemoryApi, ScriptedApi};
