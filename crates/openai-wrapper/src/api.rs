use async_trait::async_trait;
use serde_json::Value;
use wrapper_common::TransportError;

use crate::{ChatRequest, ImageRequest, ModerationRequest};

/// The raw endpoints the request builders drive.
///
/// Implementations only move JSON: they serialize the request, perform one
/// call and hand back the untouched reply body. Turning that body into typed
/// values is the job of the response mappers, so a test double only needs to
/// return canned `serde_json::Value`s.
#[async_trait]
pub trait OpenAIApi: Send + Sync {
    /// `POST /chat/completions`
    async fn chat_completion(&self, request: &ChatRequest) -> Result<Value, TransportError>;

    /// `POST /images/generations`
    async fn create_image(&self, request: &ImageRequest) -> Result<Value, TransportError>;

    /// `POST /moderations`
    async fn create_moderation(&self, request: &ModerationRequest)
    -> Result<Value, TransportError>;

    /// `GET /models`
    async fn list_models(&self) -> Result<Value, TransportError>;

    /// `GET /models/{model_id}`
    async fn retrieve_model(&self, model_id: &str) -> Result<Value, TransportError>;
}
