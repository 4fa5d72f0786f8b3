//! Error types for fetching and querying.
//!
//! Uses the dual-error pattern: `FetchError` and `QueryError` are returned by
//! the operations that can produce them, and `ReptileError` collects both for
//! caller transforms that want a single error type to `?` through.

use thiserror::Error;

/// Failure to retrieve or decode a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Source is empty or not an absolute http(s) URL.
    #[error("Invalid source '{source_url}': {reason}")]
    InvalidSource { source_url: String, reason: String },

    /// Charset label not known to the decoder.
    #[error("Unsupported encoding: '{0}'")]
    UnsupportedEncoding(String),

    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Reading the response body failed part way.
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Body exceeds the configured limit. `size` is the announced length, or
    /// the number of bytes read before the limit was hit.
    #[error("Response from {url} exceeds {limit} bytes (got {size})")]
    ResponseTooLarge { url: String, size: u64, limit: u64 },
}

/// A selector string the query engine rejected.
#[derive(Debug, Error)]
#[error("Invalid selector '{selector}': {message}")]
pub struct QueryError {
    pub selector: String,
    pub message: String,
}

/// Umbrella error for extraction code.
#[derive(Debug, Error)]
pub enum ReptileError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// Invalid regular expression passed to a transform helper.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A field the caller requires was absent.
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Result type alias for extraction code.
pub type Result<T, E = ReptileError> = std::result::Result<T, E>;
