//! Content moderation (`POST /moderations`)

use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};

use crate::{OpenAIApi, OpenAIRequestError};

/// Moderation classifier to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum ModerationModel {
    #[default]
    #[serde(rename = "text-moderation-stable")]
    #[strum(serialize = "text-moderation-stable")]
    Stable,
    #[serde(rename = "text-moderation-latest")]
    #[strum(serialize = "text-moderation-latest")]
    Latest,
}

/// Request for content moderation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(builder_type(vis = "pub"), state_mod(vis = "pub"))]
pub struct ModerationRequest {
    /// Text to classify
    #[builder(into)]
    pub input: String,

    #[builder(default)]
    pub model: ModerationModel,
}

impl ModerationRequest {
    /// Classify `input` with the stable model
    pub fn new(input: impl Into<String>) -> Self {
        Self::builder().input(input).build()
    }

    /// Send the request and map the reply. Performs exactly one call.
    pub async fn generate<A>(&self, api: &A) -> Result<ModerationResponse, OpenAIRequestError>
    where
        A: OpenAIApi + ?Sized,
    {
        log::debug!("moderation: model={}", self.model);
        let raw = api.create_moderation(self).await?;
        ModerationResponse::from_raw(raw)
    }
}

/// Response from moderation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResponse {
    pub id: String,
    pub model: String,
    pub results: Vec<ModerationResult>,
}

/// Moderation verdict for a single input
///
/// Categories are kept as maps: the service adds new ones over time
/// (`harassment/threatening`, `self-harm/intent`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    pub flagged: bool,
    pub categories: BTreeMap<String, bool>,
    pub category_scores: BTreeMap<String, f64>,
}

impl ModerationResponse {
    /// Map a raw reply body into a typed response
    pub fn from_raw(raw: Value) -> Result<Self, OpenAIRequestError> {
        let response: Self = serde_json::from_value(raw)
            .map_err(|e| OpenAIRequestError::malformed("moderation", e))?;
        log::debug!("mapped moderation {} ({} results)", response.id, response.results.len());
        Ok(response)
    }

    /// True when any input was flagged
    #[must_use]
    pub fn flagged(&self) -> bool {
        self.results.iter().any(|r| r.flagged)
    }
}

impl ModerationResult {
    /// Names of the categories that triggered, in sorted order
    pub fn flagged_categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(|(_, hit)| **hit)
            .map(|(name, _)| name.as_str())
    }

    /// Score for one category, if the service reported it
    #[must_use]
    pub fn score(&self, category: &str) -> Option<f64> {
        self.category_scores.get(category).copied()
    }
}
