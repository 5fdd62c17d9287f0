// Error types for the xpost client library.
// Covers REST API errors, cache errors, and per-call precondition failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum XpostError {
    #[error("REST API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Missing WPCOM_OAUTH_TOKEN environment variable")]
    MissingToken,

    #[error("No REST API client is bound for this site")]
    MissingApiClient,

    #[error("Suggestion store not available")]
    MissingStore,

    #[error("Site hostname not available")]
    MissingHostname,

    #[error("No suggestions available: the device is offline or the server returned an empty set")]
    NoResultsAvailable,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, XpostError>;
