//! Post composition with anti-repetition memory and canned fallbacks.

use crate::memory::RecentPosts;
use crate::persona::{FALLBACK_POSTS, PERSONA};
use agentfish_models::{GenerateRequest, Message, TextDriver};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, error, instrument};

const MAX_POST_CHARS: usize = 280;

// How many recent posts ride along as anti-repetition context.
const AVOID_CONTEXT: usize = 5;

const RECENT_CAPACITY: usize = 20;

/// Composes one post per invocation.
///
/// Composition never fails: any driver error is absorbed by drawing a random
/// member of the fixed fallback set, so the caller always receives a
/// non-empty post of at most 280 characters.
pub struct PostComposer<D: TextDriver> {
    driver: D,
    memory: RecentPosts,
}

impl<D: TextDriver> PostComposer<D> {
    /// Creates a composer over the given driver with empty memory.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            memory: RecentPosts::new(RECENT_CAPACITY),
        }
    }

    /// Recent-post memory, most useful for inspection in tests.
    pub fn memory(&self) -> &RecentPosts {
        &self.memory
    }

    /// Produce the next post.
    ///
    /// On success the post is recorded in memory; fallback posts are not.
    #[instrument(skip(self, rng), fields(provider = self.driver.provider_name()))]
    pub async fn compose<R: Rng>(&mut self, rng: &mut R) -> String {
        debug!("Starting post composition");

        let request = self.build_request();
        match self.driver.generate(&request).await {
            Ok(response) => {
                let text = bound_chars(response.text.trim(), MAX_POST_CHARS);
                if text.is_empty() {
                    error!("Driver returned a blank completion, using fallback");
                    return self.fallback(rng);
                }

                self.memory.push(text);
                debug!(chars = text.chars().count(), "Composed post");
                text.to_string()
            }
            Err(e) => {
                error!(error = %e, "Post generation failed, using fallback");
                self.fallback(rng)
            }
        }
    }

    fn build_request(&self) -> GenerateRequest {
        let avoid = self.memory.recent(AVOID_CONTEXT).join(" | ");
        GenerateRequest {
            system: Some(PERSONA.to_string()),
            messages: vec![Message::user(format!(
                "Generate a unique fish post. Recent posts to avoid repeating: {}",
                avoid
            ))],
            max_tokens: Some(100),
        }
    }

    fn fallback<R: Rng>(&self, rng: &mut R) -> String {
        let post = FALLBACK_POSTS
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_POSTS[0]);
        debug!(post = %post, "Selected fallback post");
        post.to_string()
    }
}

/// Longest prefix of `text` holding at most `max` characters.
fn bound_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
