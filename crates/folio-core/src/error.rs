//! Error types for the Folio core.

use std::path::PathBuf;

use thiserror::Error;

/// Construction-time errors (bad role lists, unreadable configuration).
#[derive(Debug, Error)]
pub enum FolioError {
    /// The typewriter needs at least one role
    #[error("role list is empty")]
    EmptyRoleList,

    /// A role string was blank after trimming
    #[error("role at index {index} is blank")]
    BlankRole { index: usize },

    /// Configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Preference storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contact form validation errors, reported before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),
}

/// Form relay delivery errors
#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay answered with a non-2xx status
    #[error("relay rejected submission with status {0}")]
    Status(u16),

    /// The request never completed
    #[error("relay transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}
