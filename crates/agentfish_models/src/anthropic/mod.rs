//! Anthropic (Claude) Messages API driver.

mod client;
mod types;

pub use client::{AnthropicClient, DEFAULT_MODEL};
pub use types::{
    AnthropicContent, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicResponseBuilder, AnthropicUsage,
};
