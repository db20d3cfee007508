use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an API description.
///
/// A failed load never touches the catalog that is already loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Please enter a URL")]
    Input,

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Failed to load API: {0}")]
    Network(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}
