//! Trait definition for LLM backends.

use crate::{GenerateRequest, GenerateResponse};
use agentfish_error::ModelsResult;
use async_trait::async_trait;

/// Core trait that all LLM backends must implement.
///
/// This provides the minimal interface for one-shot text generation. The
/// composer is generic over this trait so tests can substitute a scripted
/// backend.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Generate model output given a request.
    async fn generate(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}
