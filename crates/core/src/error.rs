use providers::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("unsupported API source '{0}'. Please choose 'google' or 'bing'.")]
    UnsupportedProvider(String),
    #[error("unsupported file format '{0}'. Please choose 'txt', 'csv', or 'json'.")]
    UnsupportedFormat(String),
    #[error("no keywords available to export")]
    EmptyList,
    #[error("keyword must not be empty")]
    EmptyKeyword,
    #[error("invalid settings file: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("notification failed: {0}")]
    Notify(String),
}

impl ScraperError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
