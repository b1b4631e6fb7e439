//! Error types for the redirects crate.

use thiserror::Error;

pub type RedirectResult<T> = Result<T, RedirectError>;

/// Errors surfaced while fetching content data or writing artifacts.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The HTTP request itself failed (connection, DNS, etc).
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// A query URL could not be constructed.
    #[error("invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Writing an output artifact failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an output artifact failed.
    #[error("failed to serialize redirects: {0}")]
    Serialize(#[from] serde_json::Error),
}
