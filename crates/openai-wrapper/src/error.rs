use serde::{Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;
use wrapper_common::TransportError;

/// Errors that can occur when building requests or talking to the OpenAI API
#[derive(Debug, Error)]
pub enum OpenAIRequestError {
    /// A builder input violates a documented constraint.
    /// Always raised before anything is sent.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The call to the service failed (network, auth, HTTP error status)
    #[error(transparent)]
    Transport(TransportError),

    /// The service replied, but not with the shape we expect
    #[error("malformed {context} response: {reason}")]
    MalformedResponse {
        context: &'static str,
        reason: String,
    },

    /// Missing API key
    #[error("Missing API key")]
    MissingApiKey,
}

/// Success replies whose body is not JSON map to
/// [`OpenAIRequestError::MalformedResponse`]; everything else is `Transport`.
impl From<TransportError> for OpenAIRequestError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::InvalidBody { source, .. } => Self::malformed("HTTP", source),
            other => Self::Transport(other),
        }
    }
}

impl OpenAIRequestError {
    pub(crate) fn malformed(context: &'static str, reason: impl ToString) -> Self {
        Self::MalformedResponse {
            context,
            reason: reason.to_string(),
        }
    }

    /// True for failures that never reached the service
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    #[must_use]
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

impl Serialize for OpenAIRequestError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OpenAIRequestError::InvalidParameter { name, reason } => {
                let mut state = serializer.serialize_struct("OpenAIRequestError", 3)?;
                state.serialize_field("type", "InvalidParameter")?;
                state.serialize_field("parameter", name)?;
                state.serialize_field("reason", reason)?;
                state.end()
            }
            OpenAIRequestError::Transport(e) => {
                let field_count = if e.status().is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("OpenAIRequestError", field_count)?;
                state.serialize_field("type", "Transport")?;
                if let Some(status) = e.status() {
                    state.serialize_field("status", &status)?;
                }
                state.serialize_field("error", &e.to_string())?;
                state.end()
            }
            OpenAIRequestError::MalformedResponse { context, reason } => {
                let mut state = serializer.serialize_struct("OpenAIRequestError", 3)?;
                state.serialize_field("type", "MalformedResponse")?;
                state.serialize_field("context", context)?;
                state.serialize_field("reason", reason)?;
                state.end()
            }
            OpenAIRequestError::MissingApiKey => {
                let mut state = serializer.serialize_struct("OpenAIRequestError", 1)?;
                state.serialize_field("type", "MissingApiKey")?;
                state.end()
            }
        }
    }
}
