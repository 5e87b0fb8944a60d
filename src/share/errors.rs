//! Error types for the share-link client

use thiserror::Error;

/// Result type alias for share operations
pub type ShareResult<T> = Result<T, ShareError>;

/// Failures talking to the share-link service.
///
/// A missing or expired link is not an error; `fetch` reports those as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The configured service base URL did not parse
    #[error("invalid share service base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Refused before any I/O: snippet lacks code or language
    #[error("snippet is missing required code or language")]
    IncompleteSnippet,

    /// Refused before any I/O: id does not have the short id shape
    #[error("malformed short id: {0:?}")]
    InvalidShortId(String),

    /// The service answered with a failure status
    #[error("share service returned {status}: {message}")]
    Service { status: u16, message: String },

    /// The service answered 2xx but the body did not decode
    #[error("failed to decode share service response: {0}")]
    Decode(String),

    /// Connection, TLS, or timeout failure
    #[error("share service transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ShareError {
    /// Check if the operation is worth retrying as-is.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            ShareError::Transport(_) => true,
            ShareError::Service { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
