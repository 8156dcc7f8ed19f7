//! LLM provider drivers for AgentFish.
//!
//! This crate defines the provider seam ([`TextDriver`]) and the one driver
//! the bot ships with:
//! - **Anthropic** (Claude) via the Messages API
//!
//! Requests and responses cross the seam as the provider-neutral
//! [`GenerateRequest`] / [`GenerateResponse`] pair, so the composer and its
//! tests never see provider wire formats.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod driver;
mod request;

pub use anthropic::{
    AnthropicClient, AnthropicContent, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicResponseBuilder,
    AnthropicUsage, DEFAULT_MODEL,
};
pub use driver::TextDriver;
pub use request::{GenerateRequest, GenerateResponse, Message, Role};
