pub mod api;
pub mod error;
pub mod http;
pub mod spreadsheet;

pub use api::{DirectoryApi, ImportSummary, SearchPage, SearchRequest};
pub use error::{Error, Result};
pub use http::HttpApi;
