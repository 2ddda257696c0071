#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Typed request builders and response mappers for the OpenAI HTTP API
//!
//! This crate provides:
//! - Chat completions through a validated, single-use [`ChatRequest`]
//! - Image generation
//! - Content moderation
//! - Model listing
//!
//! Every operation performs at most one HTTP call through an [`OpenAIApi`]
//! implementation and maps the raw JSON reply into typed values. Replies
//! that do not have the expected shape fail with
//! [`OpenAIRequestError::MalformedResponse`], never with a panic.
//!
//! # Example
//!
//! ```rust,no_run
//! use openai_wrapper::{Model, OpenAI, SystemMessage, UserMessage, MessageBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAI::from_env()?;
//!
//!     let mut request = client.chat(Model::Gpt3_5Turbo);
//!     request
//!         .add_message(SystemMessage::build("You are terse."))
//!         .add_message(UserMessage::build("Hello, how are you?"))
//!         .set_temperature(0.2)?
//!         .set_max_tokens(32);
//!
//!     let response = request.generate(&client).await?;
//!     println!("{}", response.content());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod image;
mod internal;
pub mod message;
pub mod model;
pub mod models;
pub mod moderation;
pub mod request;
pub mod response;
pub mod usage;

// Re-export main types
pub use api::OpenAIApi;
pub use client::OpenAI;
pub use error::OpenAIRequestError;
pub use message::{Message, MessageBuilder, Role, SystemMessage, UserMessage};
pub use model::Model;
pub use usage::Usage;

pub use request::{ChatRequest, Temperature};
pub use response::{ChatResponse, Choice, ChoiceMessage};

pub use image::{Image, ImageData, ImageFormat, ImageRequest, ImageResponse, ImageSize};
pub use models::{ModelInfo, ModelPermission};
pub use moderation::{ModerationModel, ModerationRequest, ModerationResponse, ModerationResult};

// Re-export shared types from wrapper-common
pub use wrapper_common::{Timestamp, TransportError};
