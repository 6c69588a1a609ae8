//! Error types for status polling.

use thiserror::Error;

use super::StatusSnapshot;

/// Result of one poll cycle. The display is only updated on `Ok`.
pub type PollOutcome = Result<StatusSnapshot, PollError>;

/// Errors that can occur while polling the status endpoint.
///
/// Every variant is recoverable: the cycle is skipped and the display keeps
/// its previous values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// Could not connect to the endpoint.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Any other transport-level failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned status {0}")]
    Status(u16),

    /// The body was not a valid status document.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PollError::Timeout
        } else if err.is_connect() {
            PollError::Connection(err.to_string())
        } else {
            PollError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PollError {
    fn from(err: serde_json::Error) -> Self {
        PollError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code() {
        assert_eq!(
            PollError::Status(503).to_string(),
            "Endpoint returned status 503"
        );
    }

    #[test]
    fn test_from_serde_error_is_parse() {
        let err = serde_json::from_str::<StatusSnapshot>("nope").unwrap_err();
        assert!(matches!(PollError::from(err), PollError::Parse(_)));
    }
}
