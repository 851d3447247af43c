use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Unavailable(String),
    #[error("reference payload exceeds {limit} bytes")]
    TooLarge { limit: u64 },
    #[error("reference payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("malformed reference JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("reference JSON must be an array of objects")]
    NotAnArray,
    #[error("no valid reference entries found")]
    NoValidEntries,
    #[error("unsupported reference url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("{0}")]
    PreviousFailure(String),
    #[cfg(feature = "http-fetch")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "http-fetch")]
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
