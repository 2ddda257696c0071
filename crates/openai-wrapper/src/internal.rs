use serde_json::Value;
use wrapper_common::{
    TransportError,
    request_builder::{AuthMethod, Endpoint, RequestBuilder, RequestConfig},
};

use crate::{ChatRequest, ImageRequest, ModerationRequest};

const USER_AGENT: &str = concat!("openai-wrapper/", env!("CARGO_PKG_VERSION"));

/// OpenAI client helper methods using the common RequestBuilder
pub(crate) struct OpenAIRequestHelper {
    /// Configured executor for every endpoint below
    request_builder: RequestBuilder,
}

impl OpenAIRequestHelper {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: &str,
        organization: Option<&str>,
    ) -> Self {
        let mut config = RequestConfig::new(base_url)
            .with_auth(AuthMethod::Bearer(api_key.to_string()))
            .with_user_agent(USER_AGENT);

        if let Some(org) = organization {
            config = config.with_header("OpenAI-Organization", org);
        }

        Self {
            request_builder: RequestBuilder::new(client, config),
        }
    }

    pub(crate) async fn send_chat_request(
        &self,
        request: &ChatRequest,
    ) -> Result<Value, TransportError> {
        let endpoint = Endpoint::post("chat/completions");
        self.request_builder
            .request_json(&endpoint, Some(request))
            .await
    }

    pub(crate) async fn create_image(&self, request: &ImageRequest) -> Result<Value, TransportError> {
        let endpoint = Endpoint::post("images/generations");
        self.request_builder
            .request_json(&endpoint, Some(request))
            .await
    }

    pub(crate) async fn create_moderation(
        &self,
        request: &ModerationRequest,
    ) -> Result<Value, TransportError> {
        let endpoint = Endpoint::post("moderations");
        self.request_builder
            .request_json(&endpoint, Some(request))
            .await
    }

    pub(crate) async fn list_models(&self) -> Result<Value, TransportError> {
        self.request_builder.request(&Endpoint::get("models")).await
    }

    pub(crate) async fn retrieve_model(&self, model_id: &str) -> Result<Value, TransportError> {
        let endpoint = Endpoint::get(format!("models/{model_id}"));
        self.request_builder.request(&endpoint).await
    }
}
