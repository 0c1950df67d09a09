//! Error types for Booklens Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by catalog queries
///
/// Both upstream kinds are passed through to the caller unchanged; nothing in
/// this crate retries or recovers from them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No usable response was obtained (network failure, undecodable body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The catalog answered with a non-success HTTP status
    #[error("Upstream error: status {status}")]
    Upstream { status: u16 },

    /// The request violated a precondition and was never sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CatalogError {
    /// Whether the catalog reported the requested resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Upstream { status: 404 })
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CatalogError::Upstream {
                status: status.as_u16(),
            },
            None => CatalogError::Transport(err.to_string()),
        }
    }
}

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Errors raised when editing reading preferences
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferencesError {
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Duplicate genre: {0}")]
    DuplicateGenre(String),
}
