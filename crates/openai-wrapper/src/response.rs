use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{OpenAIRequestError, Usage};

/// Response from chat completion
///
/// Only the first candidate is surfaced, even when more were requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    /// Unique identifier for the response
    pub id: String,

    /// Object type (usually "chat.completion")
    pub object: String,

    /// Model that served the completion, as reported by the service
    pub model: String,

    /// The first completion choice
    pub choice: Choice,

    /// Usage statistics
    pub usage: Usage,
}

/// A completion choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice
    pub index: u32,

    /// The completion message
    pub message: ChoiceMessage,

    /// Reason for stopping, e.g. `stop` or `length`
    pub finish_reason: String,
}

/// The message carried by a [`Choice`]
///
/// The role is kept as a plain string: replies come from roles this client
/// never sends (`assistant`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: String,
    pub content: String,
}

/// Wire shape of a chat completion reply; extra fields are ignored
#[derive(Deserialize)]
struct RawChatResponse {
    id: String,
    object: String,
    model: String,
    choices: Vec<Choice>,
    usage: Usage,
}

impl ChatResponse {
    /// Map a raw reply body into a typed response.
    ///
    /// Fails with [`OpenAIRequestError::MalformedResponse`] when a required
    /// field is missing or mistyped, or when `choices` is empty.
    pub fn from_raw(raw: Value) -> Result<Self, OpenAIRequestError> {
        let RawChatResponse {
            id,
            object,
            model,
            choices,
            usage,
        } = serde_json::from_value(raw)
            .map_err(|e| OpenAIRequestError::malformed("chat completion", e))?;

        let choice = choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAIRequestError::malformed("chat completion", "`choices` is empty"))?;

        log::debug!("mapped chat completion {id} from {model}");

        Ok(Self {
            id,
            object,
            model,
            choice,
            usage,
        })
    }

    /// Text of the surfaced choice
    #[must_use]
    pub fn content(&self) -> &str {
        &self.choice.message.content
    }

    #[must_use]
    pub fn finish_reason(&self) -> &str {
        &self.choice.finish_reason
    }
}

impl TryFrom<Value> for ChatResponse {
    type Error = OpenAIRequestError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
