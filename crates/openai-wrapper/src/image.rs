//! Image generation (`POST /images/generations`)

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};
use wrapper_common::Timestamp;

use crate::{OpenAIApi, OpenAIRequestError};

/// Output resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    #[strum(serialize = "256x256")]
    Small,
    #[serde(rename = "512x512")]
    #[strum(serialize = "512x512")]
    Medium,
    #[default]
    #[serde(rename = "1024x1024")]
    #[strum(serialize = "1024x1024")]
    Large,
}

/// How generated images are returned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageFormat {
    #[default]
    Url,
    B64Json,
}

/// Request for image generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(builder_type(vis = "pub"), state_mod(vis = "pub"))]
pub struct ImageRequest {
    /// Text description of the desired image
    #[builder(into)]
    pub prompt: String,

    /// Number of images to generate
    #[builder(default = 1)]
    pub n: u32,

    #[builder(default)]
    pub size: ImageSize,

    #[builder(default)]
    pub response_format: ImageFormat,

    /// End-user identifier for abuse monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub user: Option<String>,
}

impl ImageRequest {
    /// Send the request and map the reply. Performs exactly one call.
    pub async fn generate<A>(&self, api: &A) -> Result<ImageResponse, OpenAIRequestError>
    where
        A: OpenAIApi + ?Sized,
    {
        log::debug!("image generation: n={} size={}", self.n, self.size);
        let raw = api.create_image(self).await?;
        ImageResponse::from_raw(raw)
    }
}

/// One-call entry point mirroring [`crate::ChatRequest::create`]
pub struct Image;

impl Image {
    pub async fn create<A>(
        api: &A,
        prompt: impl Into<String>,
        n: u32,
        size: ImageSize,
        response_format: ImageFormat,
        user: Option<String>,
    ) -> Result<ImageResponse, OpenAIRequestError>
    where
        A: OpenAIApi + ?Sized,
    {
        ImageRequest::builder()
            .prompt(prompt)
            .n(n)
            .size(size)
            .response_format(response_format)
            .maybe_user(user)
            .build()
            .generate(api)
            .await
    }
}

/// Response from image generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResponse {
    pub created: Timestamp,
    pub data: Vec<ImageData>,
}

/// A single generated image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageData {
    Url(String),
    B64Json(String),
}

impl ImageData {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::B64Json(_) => None,
        }
    }
}

/// Wire shape of an image reply
#[derive(Deserialize)]
struct RawImageResponse {
    created: Timestamp,
    data: Vec<RawImageData>,
}

#[derive(Deserialize)]
struct RawImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl ImageResponse {
    /// Map a raw reply body. Each item must carry either `url` or `b64_json`.
    pub fn from_raw(raw: Value) -> Result<Self, OpenAIRequestError> {
        let RawImageResponse { created, data } = serde_json::from_value(raw)
            .map_err(|e| OpenAIRequestError::malformed("image generation", e))?;

        let data = data
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                RawImageData { url: Some(url), .. } => Ok(ImageData::Url(url)),
                RawImageData {
                    b64_json: Some(b64),
                    ..
                } => Ok(ImageData::B64Json(b64)),
                _ => Err(OpenAIRequestError::malformed(
                    "image generation",
                    format!("data[{i}] has neither `url` nor `b64_json`"),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { created, data })
    }
}
