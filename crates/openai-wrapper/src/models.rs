//! Model listing (`GET /models`, `GET /models/{id}`)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wrapper_common::Timestamp;

use crate::{OpenAIApi, OpenAIRequestError};

/// A model as described by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub object: String,
    pub created: Timestamp,
    pub owned_by: String,
    /// Legacy access list; current deployments omit it
    #[serde(default)]
    pub permission: Vec<ModelPermission>,
}

/// One entry of a model's legacy permission list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPermission {
    pub id: String,
    pub object: String,
    pub created: Timestamp,
    pub allow_create_engine: bool,
    pub allow_sampling: bool,
    pub allow_logprobs: bool,
    pub allow_search_indices: bool,
    pub allow_view: bool,
    pub allow_fine_tuning: bool,
    pub organization: String,
    pub group: Option<String>,
    pub is_blocking: bool,
}

#[derive(Deserialize)]
struct RawModelList {
    data: Vec<ModelInfo>,
}

impl ModelInfo {
    pub fn from_raw(raw: Value) -> Result<Self, OpenAIRequestError> {
        serde_json::from_value(raw).map_err(|e| OpenAIRequestError::malformed("model", e))
    }
}

/// Every model visible to the API key
pub async fn list<A>(api: &A) -> Result<Vec<ModelInfo>, OpenAIRequestError>
where
    A: OpenAIApi + ?Sized,
{
    let raw = api.list_models().await?;
    let RawModelList { data } =
        serde_json::from_value(raw).map_err(|e| OpenAIRequestError::malformed("model list", e))?;
    log::debug!("listed {} models", data.len());
    Ok(data)
}

/// A single model by id
pub async fn retrieve<A>(api: &A, model_id: &str) -> Result<ModelInfo, OpenAIRequestError>
where
    A: OpenAIApi + ?Sized,
{
    let raw = api.retrieve_model(model_id).await?;
    ModelInfo::from_raw(raw)
}
