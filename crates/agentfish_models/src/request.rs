//! Request and response types for LLM generation.

use serde::{Deserialize, Serialize};

/// Conversation role for a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End-user turn
    User,
    /// Model turn
    Assistant,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced this turn
    pub role: Role,
    /// Turn text
    pub content: String,
}

impl Message {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use agentfish_models::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     system: Some("You are a fish.".to_string()),
///     messages: vec![Message::user("Generate a unique fish post.")],
///     max_tokens: Some(100),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// System instructions constraining the output style
    pub system: Option<String>,
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
}

/// The provider-neutral response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated completion text
    pub text: String,
}
