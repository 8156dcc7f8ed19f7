//! Posting loop behavior with scripted collaborators.

use agentfish_bot::{Clock, FALLBACK_POSTS, FishLoop, PostComposer, Schedule};
use agentfish_error::{
    AnthropicErrorKind, ModelsError, ModelsResult, SocialError, SocialErrorKind, SocialResult,
    XErrorKind,
};
use agentfish_models::{GenerateRequest, GenerateResponse, TextDriver};
use agentfish_social::{PostId, PostReceipt, SocialPlatform};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const BASE_MS: u64 = 1_800_000;
const JITTER_MS: u64 = 600_000;

struct FixedDriver {
    completion: Option<&'static str>,
}

#[async_trait]
impl TextDriver for FixedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        match self.completion {
            Some(text) => Ok(GenerateResponse {
                text: text.to_string(),
            }),
            None => Err(ModelsError::new(
                AnthropicErrorKind::Http("connection reset".to_string()).into(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

struct RecordingPlatform {
    posts: Arc<Mutex<Vec<String>>>,
    fail_with_status: Option<u16>,
}

impl RecordingPlatform {
    fn succeeding() -> (Self, Arc<Mutex<Vec<String>>>) {
        let posts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                posts: Arc::clone(&posts),
                fail_with_status: None,
            },
            posts,
        )
    }

    fn failing(status: u16) -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            fail_with_status: Some(status),
        }
    }
}

#[async_trait]
impl SocialPlatform for RecordingPlatform {
    async fn post(&self, text: &str) -> SocialResult<PostReceipt> {
        if let Some(status) = self.fail_with_status {
            return Err(SocialError::new(
                XErrorKind::ApiError {
                    status,
                    message: "rate limited".to_string(),
                }
                .into(),
            ));
        }

        self.posts.lock().expect("posts lock").push(text.to_string());
        Ok(PostReceipt::new(PostId("12345".to_string()), text))
    }

    fn platform_name(&self) -> &'static str {
        "recording"
    }

    fn max_text_length(&self) -> usize {
        280
    }
}

/// Records requested sleeps and returns instantly until `limit` is reached,
/// then parks forever so `run` stops making progress.
struct CountingClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
    limit: usize,
}

impl CountingClock {
    fn new(limit: usize) -> (Self, Arc<Mutex<Vec<Duration>>>) {
        let sleeps = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                sleeps: Arc::clone(&sleeps),
                limit,
            },
            sleeps,
        )
    }
}

#[async_trait]
impl Clock for CountingClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0)
            .single()
            .expect("valid timestamp")
    }

    async fn sleep(&self, duration: Duration) {
        let count = {
            let mut sleeps = self.sleeps.lock().expect("sleeps lock");
            sleeps.push(duration);
            sleeps.len()
        };

        if count > self.limit {
            std::future::pending::<()>().await;
        }
    }
}

fn schedule() -> Schedule {
    Schedule::new(
        Duration::from_millis(BASE_MS),
        Duration::from_millis(JITTER_MS),
    )
}

#[tokio::test]
async fn cycle_publishes_composed_post_and_returns_receipt() {
    let (platform, posts) = RecordingPlatform::succeeding();
    let composer = PostComposer::new(FixedDriver {
        completion: Some("glub"),
    });
    let (clock, _) = CountingClock::new(0);
    let mut fish = FishLoop::new(composer, platform, schedule(), clock);

    let receipt = fish.cycle().await.expect("publish succeeds");
    assert_eq!(receipt.id().0, "12345");
    assert_eq!(receipt.text(), "glub");
    assert_eq!(*posts.lock().expect("posts lock"), vec!["glub".to_string()]);
}

#[tokio::test]
async fn publish_error_kind_reaches_the_caller_unmodified() {
    let composer = PostComposer::new(FixedDriver {
        completion: Some("glub"),
    });
    let (clock, _) = CountingClock::new(0);
    let mut fish = FishLoop::new(composer, RecordingPlatform::failing(403), schedule(), clock);

    let err = fish.cycle().await.expect_err("publish fails");
    assert!(matches!(
        err.kind,
        SocialErrorKind::X(XErrorKind::ApiError { status: 403, .. })
    ));
}

#[tokio::test]
async fn generation_failure_still_publishes_a_fallback() {
    let (platform, posts) = RecordingPlatform::succeeding();
    let composer = PostComposer::new(FixedDriver { completion: None });
    let (clock, _) = CountingClock::new(0);
    let mut fish = FishLoop::new(composer, platform, schedule(), clock);

    let receipt = fish.cycle().await.expect("publish succeeds");
    assert!(FALLBACK_POSTS.contains(&receipt.text().as_str()));
    assert_eq!(posts.lock().expect("posts lock").len(), 1);
}

#[tokio::test]
async fn loop_posts_immediately_then_sleeps_within_the_jitter_window() {
    let (platform, posts) = RecordingPlatform::succeeding();
    let composer = PostComposer::new(FixedDriver {
        completion: Some("blub"),
    });
    let (clock, sleeps) = CountingClock::new(3);
    let mut fish = FishLoop::new(composer, platform, schedule(), clock);

    let parked = tokio::time::timeout(Duration::from_millis(250), fish.run()).await;
    assert!(parked.is_err(), "the loop never completes on its own");

    let sleeps = sleeps.lock().expect("sleeps lock");
    assert_eq!(sleeps.len(), 4, "three instant sleeps plus the parked one");
    for wait in sleeps.iter() {
        let millis = wait.as_millis() as u64;
        assert!((BASE_MS..=BASE_MS + JITTER_MS).contains(&millis));
    }

    // First post fires before any sleep; one more per completed sleep.
    assert_eq!(posts.lock().expect("posts lock").len(), 4);
}

#[tokio::test]
async fn publish_failures_do_not_stop_the_loop() {
    let composer = PostComposer::new(FixedDriver {
        completion: Some("blub"),
    });
    let (clock, sleeps) = CountingClock::new(2);
    let mut fish = FishLoop::new(composer, RecordingPlatform::failing(500), schedule(), clock);

    let parked = tokio::time::timeout(Duration::from_millis(250), fish.run()).await;
    assert!(parked.is_err(), "the loop never completes on its own");

    // The loop kept scheduling cycles past every failed publish.
    assert_eq!(sleeps.lock().expect("sleeps lock").len(), 3);
}
