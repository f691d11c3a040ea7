//! Error types for query execution.

use kbot_core::KbotError;

/// Errors from executing a query against the external index.
///
/// The executor surfaces these explicitly; the fail-open-to-empty decision
/// is made by the caller, not hidden here.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("index returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}

impl From<SearchError> for KbotError {
    fn from(err: SearchError) -> Self {
        KbotError::Search(err.to_string())
    }
}
