//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing on this page is fatal. Callers log these errors and carry on with
//! degraded behavior (no persistence, empty gallery) instead of panicking.

/// Errors raised by storage access and catalog construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage write rejected for key {key}")]
    StorageWrite { key: String },
    #[error("draft encoding failed: {0}")]
    Encode(String),
    #[error("duplicate project name: {0}")]
    DuplicateProject(String),
}

impl From<serde_json::Error> for PortfolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e.to_string())
    }
}
