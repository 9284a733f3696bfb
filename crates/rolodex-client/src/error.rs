use std::fmt;

/// Result type for rolodex-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the REST/spreadsheet boundary
#[derive(Debug)]
pub enum Error {
    /// Network/transport failure before a response arrived
    Transport(reqwest::Error),

    /// Non-2xx API response, with the server's message when it sent one
    Api { status: u16, message: String },

    /// Import file rejected locally: required columns are missing
    MissingColumns(Vec<String>),

    /// Spreadsheet could not be read or written
    Spreadsheet(csv::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// A record failed client-side validation before submission
    Validation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Error::MissingColumns(columns) => {
                write!(f, "Import file is missing columns: {}", columns.join(", "))
            }
            Error::Spreadsheet(err) => write!(f, "Spreadsheet error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Spreadsheet(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Api { .. } | Error::MissingColumns(_) | Error::Validation(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Spreadsheet(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<rolodex_types::Error> for Error {
    fn from(err: rolodex_types::Error) -> Self {
        match err {
            rolodex_types::Error::Validation(msg) => Error::Validation(msg),
        }
    }
}
