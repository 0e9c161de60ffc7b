//! Router and service errors.

use thiserror::Error;

/// Errors returned by the outbound service clients.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport failure or undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered but rejected the request.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Client is not configured (missing API key, etc.).
    #[error("Service not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    /// Whether the remote service answered with a rejection, as opposed to
    /// the call never completing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ServiceError::Api { .. })
    }
}

/// Errors that escape a feature handler.
///
/// Anything reaching the router as a `RouterError` is logged and replaced
/// by the general error sentence.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Failed to open '{target}': {source}")]
    Launch {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to schedule task: {0}")]
    Schedule(String),

    #[error("Catalog '{0}' has no entries")]
    EmptyCatalog(&'static str),

    #[error("Canned phrase '{0}' has no replies")]
    EmptyReplies(String),
}

/// Result type alias for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
