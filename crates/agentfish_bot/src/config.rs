//! Bot configuration from the process environment.

use agentfish_error::{AgentfishResult, ConfigError};
use agentfish_social::XCredentials;
use std::time::Duration;

/// Default base interval between posts: 30 minutes.
pub const DEFAULT_POST_INTERVAL: Duration = Duration::from_millis(1_800_000);

/// Maximum random jitter added to each interval: 10 minutes.
pub const JITTER_MAX: Duration = Duration::from_millis(600_000);

/// Configuration for the posting bot.
///
/// All credentials are validated eagerly at startup so a missing variable
/// fails the process before the first cycle rather than on first use.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Anthropic API key
    pub claude_api_key: String,
    /// X posting credentials
    pub x_credentials: XCredentials,
    /// Base interval between posts
    pub post_interval: Duration,
}

impl BotConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming every missing credential variable,
    /// or an invalid `POST_INTERVAL` value.
    pub fn from_env() -> AgentfishResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AgentfishResult<Self> {
        let mut missing: Vec<&str> = Vec::new();
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let claude_api_key = require("CLAUDE_API_KEY");
        let api_key = require("X_API_KEY");
        let api_secret = require("X_API_SECRET");
        let access_token = require("X_ACCESS_TOKEN");
        let access_secret = require("X_ACCESS_SECRET");

        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            ))
            .into());
        }

        let post_interval = match lookup("POST_INTERVAL") {
            Some(raw) => {
                let millis: u64 = raw.parse().map_err(|_| {
                    ConfigError::new(format!(
                        "POST_INTERVAL must be an integer millisecond count, got {:?}",
                        raw
                    ))
                })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_POST_INTERVAL,
        };

        Ok(Self {
            claude_api_key,
            x_credentials: XCredentials {
                api_key,
                api_secret,
                access_token,
                access_secret,
            },
            post_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("CLAUDE_API_KEY", "sk-test"),
            ("X_API_KEY", "app-key"),
            ("X_API_SECRET", "app-secret"),
            ("X_ACCESS_TOKEN", "access-token"),
            ("X_ACCESS_SECRET", "access-secret"),
        ])
    }

    fn lookup(env: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| env.get(key).map(|v| v.to_string())
    }

    #[test]
    fn loads_full_configuration() {
        let config = BotConfig::from_lookup(lookup(full_env())).expect("complete environment");
        assert_eq!(config.claude_api_key, "sk-test");
        assert_eq!(config.x_credentials.access_token, "access-token");
        assert_eq!(config.post_interval, DEFAULT_POST_INTERVAL);
    }

    #[test]
    fn reports_all_missing_variables_at_once() {
        let mut env = full_env();
        env.remove("CLAUDE_API_KEY");
        env.remove("X_ACCESS_SECRET");

        let err = BotConfig::from_lookup(lookup(env)).expect_err("missing credentials");
        let message = format!("{}", err);
        assert!(message.contains("CLAUDE_API_KEY, X_ACCESS_SECRET"));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let mut env = full_env();
        env.insert("X_API_SECRET", "");

        let err = BotConfig::from_lookup(lookup(env)).expect_err("empty credential");
        assert!(format!("{}", err).contains("X_API_SECRET"));
    }

    #[test]
    fn post_interval_override_in_milliseconds() {
        let mut env = full_env();
        env.insert("POST_INTERVAL", "60000");

        let config = BotConfig::from_lookup(lookup(env)).expect("valid override");
        assert_eq!(config.post_interval, Duration::from_millis(60_000));
    }

    #[test]
    fn unparsable_post_interval_is_rejected() {
        let mut env = full_env();
        env.insert("POST_INTERVAL", "30 minutes");

        let err = BotConfig::from_lookup(lookup(env)).expect_err("invalid interval");
        assert!(format!("{}", err).contains("POST_INTERVAL"));
    }
}
