/*
[INPUT]:  Error sources (transport, HTTP status, JSON decoding, form validation)
[OUTPUT]: Structured error type shared by every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::FormError;

/// Main error type for the task client
#[derive(Error, Debug)]
pub enum TaskClientError {
    /// Request could not be sent or no response was received
    #[error("could not reach the task service: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request deadline elapsed
    #[error("the task service did not respond in time")]
    Timeout,

    /// Service answered with a non-2xx status
    #[error("the task service returned HTTP {status}{}", body_suffix(.body))]
    Http { status: u16, body: String },

    /// Response body was not valid JSON or lacked required fields
    #[error("unexpected response from the task service: {0}")]
    Decode(#[from] serde_json::Error),

    /// Form values could not be turned into a payload
    #[error("{0}")]
    InvalidForm(#[from] FormError),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Request was abandoned because its view went away
    #[error("request cancelled")]
    Cancelled,
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl From<reqwest::Error> for TaskClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TaskClientError::Timeout
        } else {
            TaskClientError::Transport(err)
        }
    }
}

impl TaskClientError {
    /// Build an HTTP error from a status code and response body
    pub fn http_error(status: StatusCode, body: impl Into<String>) -> Self {
        TaskClientError::Http {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// HTTP status, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the request never got a response
    pub fn is_transport(&self) -> bool {
        matches!(self, TaskClientError::Transport(_) | TaskClientError::Timeout)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TaskClientError::Cancelled)
    }
}

/// Result type alias for task client operations
pub type Result<T> = std::result::Result<T, TaskClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_creation() {
        let err = TaskClientError::http_error(StatusCode::BAD_REQUEST, "title missing");
        match &err {
            TaskClientError::Http { status, body } => {
                assert_eq!(*status, 400);
                assert_eq!(body, "title missing");
            }
            _ => panic!("Expected Http error variant"),
        }
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "the task service returned HTTP 400: title missing"
        );
    }

    #[test]
    fn test_http_error_without_body() {
        let err = TaskClientError::http_error(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(err.to_string(), "the task service returned HTTP 500");
    }

    #[test]
    fn test_error_classification() {
        assert!(TaskClientError::Timeout.is_transport());
        assert!(!TaskClientError::Cancelled.is_transport());
        assert!(TaskClientError::Cancelled.is_cancelled());
        assert_eq!(TaskClientError::Timeout.status(), None);
    }

    #[test]
    fn test_form_error_passes_message_through() {
        let err = TaskClientError::from(FormError::MissingTitle);
        assert_eq!(err.to_string(), "title is required");
    }
}
