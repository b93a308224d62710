//! Error types for fetching and parsing Guardian search results.

use thiserror::Error;

/// Failures that abort a whole fetch.
///
/// None of these reach the renderer: [`crate::client::NewsClient::fetch_news`]
/// logs them and degrades to an empty list.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The request URL could not be parsed or uses an unsupported scheme.
    #[error("invalid request URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, timeout, or body read failure.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The API answered 200 but flagged the request as failed.
    #[error("API error: {0}")]
    Api(String),

    /// The body is not valid JSON.
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON that does not have the expected envelope.
    #[error("unexpected response shape: {0}")]
    Schema(String),
}

impl NewsError {
    /// Short category label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            NewsError::InvalidUrl { .. } => "url",
            NewsError::Network(_) => "network",
            NewsError::Status { .. } | NewsError::Api(_) => "protocol",
            NewsError::Parse(_) | NewsError::Schema(_) => "parse",
        }
    }
}

/// A problem confined to one result item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemIssue {
    /// A required field is absent; the item was skipped.
    #[error("result {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// The item could not be read at all; it was skipped.
    #[error("result {index}: malformed item: {reason}")]
    Malformed { index: usize, reason: String },

    /// The publication date is absent or unparsable; the item was kept without a date.
    #[error("result {index}: unparsable publication date {value:?}")]
    BadDate { index: usize, value: String },
}

impl ItemIssue {
    /// Whether the item was dropped from the result list.
    pub fn skipped_item(&self) -> bool {
        !matches!(self, ItemIssue::BadDate { .. })
    }
}
