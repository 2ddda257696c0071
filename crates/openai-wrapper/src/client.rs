use async_trait::async_trait;
use bon::Builder;
use core::fmt;
use serde_json::Value;
use wrapper_common::TransportError;

use crate::internal::OpenAIRequestHelper;
use crate::{ChatRequest, ImageRequest, Model, ModerationRequest, OpenAIApi, OpenAIRequestError};

const BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI API client
///
/// This is the production [`OpenAIApi`]: it owns credentials and the HTTP
/// client and forwards each call to one endpoint. Cloning is cheap.
#[derive(Clone, Builder)]
pub struct OpenAI {
    /// API key for authentication
    #[builder(into)]
    api_key: String,

    /// Base URL for the API (allows for custom endpoints)
    #[builder(default = BASE_URL.to_string(), into)]
    base_url: String,

    /// Sent as `OpenAI-Organization` when set
    #[builder(into)]
    organization: Option<String>,

    /// HTTP client for making requests; configure timeouts here
    #[builder(default)]
    client: reqwest::Client,
}

impl OpenAI {
    /// Create a new OpenAI client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new OpenAI client from the environment.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_BASE_URL` and
    /// `OPENAI_ORGANIZATION` (both optional).
    pub fn from_env() -> Result<Self, OpenAIRequestError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(OpenAIRequestError::MissingApiKey)?;

        Ok(Self::builder()
            .api_key(api_key)
            .maybe_base_url(std::env::var("OPENAI_BASE_URL").ok())
            .maybe_organization(std::env::var("OPENAI_ORGANIZATION").ok())
            .build())
    }

    /// Start a chat request for `model`
    #[must_use]
    pub fn chat(&self, model: Model) -> ChatRequest {
        ChatRequest::new(model)
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> OpenAIRequestHelper {
        OpenAIRequestHelper::new(
            self.client.clone(),
            &self.base_url,
            &self.api_key,
            self.organization.as_deref(),
        )
    }
}

#[async_trait]
impl OpenAIApi for OpenAI {
    async fn chat_completion(&self, request: &ChatRequest) -> Result<Value, TransportError> {
        self.request_helper().send_chat_request(request).await
    }

    async fn create_image(&self, request: &ImageRequest) -> Result<Value, TransportError> {
        self.request_helper().create_image(request).await
    }

    async fn create_moderation(
        &self,
        request: &ModerationRequest,
    ) -> Result<Value, TransportError> {
        self.request_helper().create_moderation(request).await
    }

    async fn list_models(&self) -> Result<Value, TransportError> {
        self.request_helper().list_models().await
    }

    async fn retrieve_model(&self, model_id: &str) -> Result<Value, TransportError> {
        self.request_helper().retrieve_model(model_id).await
    }
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAI")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .finish_non_exhaustive()
    }
}
