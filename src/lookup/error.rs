//! Patent lookup error types.

/// Errors from the patent search service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Search service returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Search base URL could not be parsed.
    #[error("invalid search URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    /// HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}
