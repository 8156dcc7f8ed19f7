//! HTTP client for the Anthropic Messages API.

use crate::{
    AnthropicMessage, AnthropicRequest, AnthropicResponse, GenerateRequest, GenerateResponse,
    Role, TextDriver,
};
use agentfish_error::{AnthropicErrorKind, ModelsError, ModelsResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., [`DEFAULT_MODEL`])
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> ModelsResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::new(AnthropicErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::new(
                AnthropicErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::new(
                AnthropicErrorKind::Parse(format!("Failed to parse response: {}", e)).into(),
            )
        })?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    /// Converts a neutral request to an Anthropic API request.
    fn convert_request(&self, request: &GenerateRequest) -> ModelsResult<AnthropicRequest> {
        let messages: Vec<AnthropicMessage> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                AnthropicMessage::builder()
                    .role(role)
                    .content(msg.content.clone())
                    .build()
                    .map_err(|e| {
                        ModelsError::new(AnthropicErrorKind::Builder(e.to_string()).into())
                    })
            })
            .collect::<ModelsResult<_>>()?;

        let mut builder = AnthropicRequest::builder();
        builder
            .model(&self.model)
            .max_tokens(request.max_tokens.unwrap_or(1024))
            .messages(messages);

        if let Some(system) = &request.system {
            builder.system(Some(system.clone()));
        }

        builder
            .build()
            .map_err(|e| ModelsError::new(AnthropicErrorKind::Builder(e.to_string()).into()))
    }

    /// Converts an Anthropic API response to a neutral response.
    fn convert_response(response: &AnthropicResponse) -> ModelsResult<GenerateResponse> {
        let text: String = response
            .content()
            .iter()
            .filter(|block| block.kind() == "text")
            .map(|block| block.text().as_str())
            .collect();

        if text.trim().is_empty() {
            return Err(ModelsError::new(AnthropicErrorKind::EmptyCompletion.into()));
        }

        Ok(GenerateResponse { text })
    }
}

#[async_trait::async_trait]
impl TextDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;
        let response = Self::convert_response(&anthropic_response)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnthropicContent, Message};
    use agentfish_error::ModelsErrorKind;

    fn client() -> AnthropicClient {
        AnthropicClient::new("test-key", DEFAULT_MODEL)
    }

    #[test]
    fn converts_request_with_system_and_user_turn() {
        let request = GenerateRequest {
            system: Some("You are a fish.".to_string()),
            messages: vec![Message::user("Generate a unique fish post.")],
            max_tokens: Some(100),
        };

        let converted = client().convert_request(&request).expect("converts");
        assert_eq!(converted.model(), DEFAULT_MODEL);
        assert_eq!(*converted.max_tokens(), 100);
        assert_eq!(converted.system().as_deref(), Some("You are a fish."));
        assert_eq!(converted.messages().len(), 1);
        assert_eq!(converted.messages()[0].role(), "user");
    }

    #[test]
    fn converts_response_text() {
        let response = AnthropicResponse::builder()
            .id("msg_01")
            .content(vec![AnthropicContent::text_block("blub blub ><(((°> 🫧")])
            .build()
            .expect("valid response");

        let converted = AnthropicClient::convert_response(&response).expect("converts");
        assert_eq!(converted.text, "blub blub ><(((°> 🫧");
    }

    #[test]
    fn empty_completion_is_an_error() {
        let response = AnthropicResponse::builder()
            .id("msg_02")
            .content(vec![AnthropicContent::text_block("   ")])
            .build()
            .expect("valid response");

        let err = AnthropicClient::convert_response(&response).expect_err("empty text");
        let ModelsErrorKind::Anthropic(kind) = &err.kind;
        assert_eq!(*kind, AnthropicErrorKind::EmptyCompletion);
    }
}
