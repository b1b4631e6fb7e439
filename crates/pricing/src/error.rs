//! Error types for the pricing crate.

use thiserror::Error;

pub type PricingResult<T> = Result<T, PricingError>;

/// Errors surfaced while fetching or normalizing plan data.
#[derive(Debug, Error)]
pub enum PricingError {
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
}
