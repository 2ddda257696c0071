use serde::Deserialize;
use thiserror::Error;

/// Envelope of an OpenAI-style error body: `{"error": {...}}`
#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    /// The nested error object, absent for non-conforming bodies
    error: Option<ApiErrorBody>,
}

/// Error details as reported by the service
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    /// Human readable message
    message: String,
    /// Error class, e.g. `invalid_request_error`
    r#type: Option<String>,
    /// Machine readable code, e.g. `invalid_api_key`
    code: Option<String>,
}

/// Errors raised while talking to the remote service
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a success status but the body is not JSON
    #[error("HTTP {status} reply is not JSON: {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The service rejected the request with a structured error body
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        r#type: Option<String>,
        code: Option<String>,
    },

    /// Non-success status whose body is not a structured API error
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl TransportError {
    /// HTTP status code reported by the service, when there was a response at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. }
            | Self::UnexpectedStatus { status, .. }
            | Self::InvalidBody { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Json(_) => None,
        }
    }
}

/// Turn a non-success reply into a [`TransportError`]
pub fn parse_error_response(status: reqwest::StatusCode, body: &[u8]) -> TransportError {
    if let Ok(ApiErrorPayload { error: Some(error) }) =
        serde_json::from_slice::<ApiErrorPayload>(body)
    {
        return TransportError::Api {
            status: status.as_u16(),
            message: error.message,
            r#type: error.r#type,
            code: error.code,
        };
    }

    TransportError::UnexpectedStatus {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
