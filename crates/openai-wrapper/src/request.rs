use serde::{Deserialize, Serialize};

use crate::{ChatResponse, Message, Model, OpenAIApi, OpenAIRequestError};

/// Sampling temperature, guaranteed to lie in `[0, 2]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 2.0;

    /// Validate a raw value. NaN is rejected along with anything out of range.
    pub fn new(value: f64) -> Result<Self, OpenAIRequestError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OpenAIRequestError::InvalidParameter {
                name: "temperature",
                reason: format!(
                    "must be between {} and {}, got {value}",
                    Self::MIN,
                    Self::MAX
                ),
            })
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = OpenAIRequestError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

/// Request for chat completion
///
/// Serializes to the wire payload
/// `{"model", "messages", "temperature", "n", "max_tokens"?}`; `max_tokens`
/// is left out entirely when unset.
///
/// A request is single-use: [`ChatRequest::generate`] takes it by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    model: Model,
    messages: Vec<Message>,
    temperature: Temperature,
    #[serde(rename = "n")]
    candidate_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with the given model and no messages
    #[must_use]
    pub fn new(model: Model) -> Self {
        Self::with_messages(model, Vec::new())
    }

    /// Create a new chat request seeded with an initial conversation
    pub fn with_messages(model: Model, messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            model,
            messages: messages.into_iter().collect(),
            temperature: Temperature::default(),
            candidate_count: 1,
            max_tokens: None,
        }
    }

    /// Build, send and map a request in one call.
    ///
    /// The temperature is validated before the transport is touched.
    pub async fn create<A>(
        api: &A,
        model: Model,
        messages: impl IntoIterator<Item = Message>,
        temperature: f64,
        candidate_count: u32,
    ) -> Result<ChatResponse, OpenAIRequestError>
    where
        A: OpenAIApi + ?Sized,
    {
        let mut request = Self::new(model);
        request
            .set_temperature(temperature)?
            .set_candidate_count(candidate_count)
            .add_messages(messages);

        request.generate(api).await
    }

    pub fn add_message(&mut self, message: Message) -> &mut Self {
        self.messages.push(message);
        self
    }

    pub fn add_messages(&mut self, messages: impl IntoIterator<Item = Message>) -> &mut Self {
        self.messages.extend(messages);
        self
    }

    /// Set the sampling temperature. On error the previous value is kept.
    pub fn set_temperature(&mut self, value: f64) -> Result<&mut Self, OpenAIRequestError> {
        self.temperature = Temperature::new(value)?;
        Ok(self)
    }

    /// Number of candidates to request (`n`). Not bounded here; the service
    /// rejects values it does not accept.
    pub fn set_candidate_count(&mut self, n: u32) -> &mut Self {
        self.candidate_count = n;
        self
    }

    pub fn set_max_tokens(&mut self, n: u32) -> &mut Self {
        self.max_tokens = Some(n);
        self
    }

    #[must_use]
    pub fn model(&self) -> Model {
        self.model
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature.value()
    }

    #[must_use]
    pub fn candidate_count(&self) -> u32 {
        self.candidate_count
    }

    #[must_use]
    pub fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    /// The JSON body that will be sent for this request
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Send the request and map the reply. Performs exactly one call.
    pub async fn generate<A>(self, api: &A) -> Result<ChatResponse, OpenAIRequestError>
    where
        A: OpenAIApi + ?Sized,
    {
        log::debug!(
            "chat completion: model={} messages={} n={}",
            self.model,
            self.messages.len(),
            self.candidate_count
        );

        let raw = api.chat_completion(&self).await?;
        let response = ChatResponse::from_raw(raw)?;

        if self.candidate_count > 1 {
            log::warn!(
                "requested {} candidates, only the first is surfaced",
                self.candidate_count
            );
        }

        Ok(response)
    }
}
