//! Social platform trait and types.

use agentfish_error::SocialResult;
use async_trait::async_trait;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Platform-specific post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PostId(pub String);

/// Confirmation data returned by a platform after a successful post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct PostReceipt {
    /// Identifier assigned by the platform.
    id: PostId,

    /// Post text as accepted by the platform.
    text: String,
}

impl PostReceipt {
    /// Create a new receipt.
    pub fn new(id: PostId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Trait for social media platform implementations.
#[async_trait]
pub trait SocialPlatform: Send + Sync {
    /// Post text content immediately.
    ///
    /// # Arguments
    ///
    /// * `text` - Text to post
    ///
    /// # Returns
    ///
    /// Platform receipt with the assigned post ID on success.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Authentication fails
    /// - Content validation fails
    /// - Platform API error
    async fn post(&self, text: &str) -> SocialResult<PostReceipt>;

    /// Platform name (e.g., "x").
    fn platform_name(&self) -> &'static str;

    /// Maximum text length for posts.
    fn max_text_length(&self) -> usize;
}
