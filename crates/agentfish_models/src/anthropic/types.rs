//! Wire types for the Anthropic Messages API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single message in an Anthropic conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role ("user" or "assistant")
    role: String,
    /// Message text
    content: String,
}

impl AnthropicMessage {
    /// Start building a message.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Request body for the Messages API.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// System instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    system: Option<String>,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Start building a request.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// One content block of a Messages API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicContent {
    /// Block type ("text" for completions)
    #[serde(rename = "type")]
    kind: String,
    /// Block text, empty for non-text blocks
    #[serde(default)]
    text: String,
}

impl AnthropicContent {
    /// Create a text content block.
    pub fn text_block(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Token accounting returned with each response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Tokens consumed by the request
    input_tokens: u32,
    /// Tokens produced in the response
    output_tokens: u32,
}

/// Response body from the Messages API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicResponse {
    /// Server-assigned response identifier
    id: String,
    /// Generated content blocks
    content: Vec<AnthropicContent>,
    /// Token usage, when reported
    #[serde(default)]
    #[builder(default)]
    usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Start building a response.
    pub fn builder() -> AnthropicResponseBuilder {
        AnthropicResponseBuilder::default()
    }
}
