use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// The role of a message sender
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// System message (instructions to the model)
    System,
    /// User message (human input)
    User,
}

/// A role-tagged message in a conversation
///
/// Serializes to the wire shape `{"role": "...", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        SystemMessage::build(content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        UserMessage::build(content)
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Produces a [`Message`] for one fixed role from free text.
///
/// Any string is accepted, including the empty one.
pub trait MessageBuilder {
    const ROLE: Role;

    fn build(content: impl Into<String>) -> Message {
        Message::new(Self::ROLE, content)
    }
}

/// Builds `user` messages
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMessage;

impl MessageBuilder for UserMessage {
    const ROLE: Role = Role::User;
}

/// Builds `system` messages
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMessage;

impl MessageBuilder for SystemMessage {
    const ROLE: Role = Role::System;
}
