// SPDX-License-Identifier: MPL-2.0
use crate::i18n::UiKey;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
    Parse(String),
}

/// Failures while retrieving a file from a data source.
/// Used to pick the user-facing message shown in the error toast.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The file does not exist in the source (missing asset, 404, ...).
    NotFound(String),

    /// The remote server answered with a non-success status.
    Status(u16),

    /// The request never completed (DNS, TLS, connection reset, ...).
    Transport(String),
}

impl FetchError {
    /// Returns the UI key for the message displayed to the user.
    pub fn ui_key(&self) -> UiKey {
        match self {
            FetchError::NotFound(_) => UiKey::ErrorsNotFound,
            FetchError::Status(_) | FetchError::Transport(_) => UiKey::ErrorsLoadFailed,
        }
    }
}

impl Error {
    /// Returns the UI key for the toast shown when this error reaches the user.
    pub fn ui_key(&self) -> UiKey {
        match self {
            Error::Fetch(e) => e.ui_key(),
            Error::Parse(_) => UiKey::ErrorsInvalidData,
            Error::Io(_) | Error::Config(_) => UiKey::ErrorsLoadFailed,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound(path) => write!(f, "not found: {}", path),
            FetchError::Status(code) => write!(f, "HTTP error! status: {}", code),
            FetchError::Transport(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Error::Fetch(FetchError::NotFound(err.to_string()));
        }
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Fetch(FetchError::Status(status.as_u16())),
            None => Error::Fetch(FetchError::Transport(err.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
