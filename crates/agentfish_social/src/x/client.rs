//! HTTP client for the X v2 API.

use crate::x::oauth::{self, OauthKeys};
use crate::{PostId, PostReceipt, SocialPlatform};
use agentfish_error::{SocialError, SocialErrorKind, SocialResult, XErrorKind};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const TWEETS_URL: &str = "https://api.twitter.com/2/tweets";
const MAX_POST_CHARS: usize = 280;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth 1.0a user-context credentials for the X API.
#[derive(Debug, Clone)]
pub struct XCredentials {
    /// App (consumer) key
    pub api_key: String,
    /// App (consumer) secret
    pub api_secret: String,
    /// Access token for the posting account
    pub access_token: String,
    /// Access token secret for the posting account
    pub access_secret: String,
}

/// X platform client.
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    credentials: XCredentials,
}

#[derive(Debug, Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}

impl XClient {
    /// Create a new X client.
    ///
    /// # Errors
    ///
    /// Returns error if any credential value is empty.
    pub fn new(credentials: XCredentials) -> SocialResult<Self> {
        for (name, value) in [
            ("api key", &credentials.api_key),
            ("api secret", &credentials.api_secret),
            ("access token", &credentials.access_token),
            ("access secret", &credentials.access_secret),
        ] {
            if value.is_empty() {
                return Err(SocialError::new(SocialErrorKind::AuthenticationFailed(
                    format!("X {} cannot be empty", name),
                )));
            }
        }

        debug!("Created X platform client");

        Ok(Self {
            client: Client::new(),
            credentials,
        })
    }

    fn validate_text(text: &str) -> SocialResult<()> {
        if text.trim().is_empty() {
            return Err(SocialError::new(SocialErrorKind::ValidationFailed(
                "Post text cannot be empty".to_string(),
            )));
        }

        let chars = text.chars().count();
        if chars > MAX_POST_CHARS {
            return Err(SocialError::new(SocialErrorKind::ValidationFailed(
                format!(
                    "Text exceeds X limit of {} characters ({})",
                    MAX_POST_CHARS, chars
                ),
            )));
        }

        Ok(())
    }

    fn parse_receipt(body: &str, text: &str) -> SocialResult<PostReceipt> {
        let response: TweetResponse = serde_json::from_str(body).map_err(|e| {
            SocialError::new(XErrorKind::Parse(format!("Failed to parse response: {}", e)).into())
        })?;

        Ok(PostReceipt::new(PostId(response.data.id), text))
    }
}

#[async_trait]
impl SocialPlatform for XClient {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn post(&self, text: &str) -> SocialResult<PostReceipt> {
        debug!("Posting content to X");

        Self::validate_text(text)?;

        let keys = OauthKeys {
            consumer_key: &self.credentials.api_key,
            consumer_secret: &self.credentials.api_secret,
            access_token: &self.credentials.access_token,
            access_secret: &self.credentials.access_secret,
        };
        let nonce = oauth::nonce(&mut rand::thread_rng());
        // JSON-body request, so no extra parameters enter the signature.
        let authorization =
            oauth::authorization_header(&keys, "POST", TWEETS_URL, &[], &nonce, Utc::now().timestamp());

        let response = self
            .client
            .post(TWEETS_URL)
            .header("authorization", authorization)
            .timeout(REQUEST_TIMEOUT)
            .json(&TweetRequest { text })
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to X API");
                SocialError::new(XErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "X API returned error");
            return Err(SocialError::new(
                XErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read X response body");
            SocialError::new(XErrorKind::Http(format!("Failed to read response: {}", e)).into())
        })?;

        let receipt = Self::parse_receipt(&body, text)?;
        info!(post_id = %receipt.id(), text = %receipt.text(), "Posted to X");
        Ok(receipt)
    }

    fn platform_name(&self) -> &'static str {
        "x"
    }

    fn max_text_length(&self) -> usize {
        MAX_POST_CHARS
    }
}
