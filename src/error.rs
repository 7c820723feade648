//! Error types for the scrape and playlist pipeline.

use reqwest::StatusCode;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scraping releases or talking to the catalog.
///
/// Remote failures carry the HTTP status and, where the body has already been
/// read, the response body, so the operator can diagnose rejected calls
/// without re-running them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry URL is missing a scheme or host; raised before any I/O.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A page fetch returned a non-success status.
    #[error("failed to fetch {url}: status {status}")]
    Fetch { url: String, status: StatusCode },

    /// A fetched document is missing structure we rely on.
    #[error("failed to parse {url}: missing {what}")]
    Parse { url: String, what: &'static str },

    /// The token endpoint rejected a refresh or code exchange.
    #[error("token exchange rejected with status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    /// The catalog search or track lookup returned a non-success status.
    #[error("catalog search failed with status {status}: {body}")]
    Search { status: StatusCode, body: String },

    /// The playlist mutation returned a non-success status.
    #[error("playlist update failed with status {status}: {body}")]
    Playlist { status: StatusCode, body: String },

    /// A JSON response did not have the expected shape.
    #[error("unexpected response shape from {context}: {source}")]
    Schema {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No refresh token has been stored yet.
    #[error("no refresh token stored")]
    NoRefreshToken,

    /// Token store failure.
    #[error("token store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
