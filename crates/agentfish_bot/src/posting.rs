//! The indefinite post-sleep-post cycle.

use crate::generation::PostComposer;
use crate::schedule::{Clock, Schedule};
use agentfish_error::SocialResult;
use agentfish_models::TextDriver;
use agentfish_social::{PostReceipt, SocialPlatform};
use tracing::{debug, error, info, instrument};

/// The posting loop: one immediate cycle, then jittered cycles forever.
pub struct FishLoop<D: TextDriver, P: SocialPlatform, C: Clock> {
    composer: PostComposer<D>,
    platform: P,
    schedule: Schedule,
    clock: C,
}

impl<D: TextDriver, P: SocialPlatform, C: Clock> FishLoop<D, P, C> {
    /// Creates a new posting loop.
    pub fn new(composer: PostComposer<D>, platform: P, schedule: Schedule, clock: C) -> Self {
        Self {
            composer,
            platform,
            schedule,
            clock,
        }
    }

    /// Runs the loop until the surrounding task is cancelled.
    ///
    /// The first cycle fires without delay. A publish failure is logged and
    /// the loop continues to the next scheduled cycle; one bad post never
    /// forfeits the ones after it.
    pub async fn run(&mut self) {
        info!(
            platform = self.platform.platform_name(),
            "Posting loop started"
        );

        self.cycle_and_log().await;

        loop {
            let wait = self.schedule.next_wait(&mut rand::thread_rng());
            let next_post =
                self.clock.now() + chrono::Duration::milliseconds(wait.as_millis() as i64);
            info!(next_transmission = %next_post.format("%H:%M:%S"), "Sleeping until next cycle");

            self.clock.sleep(wait).await;
            self.cycle_and_log().await;
        }
    }

    /// One full cycle: compose (which never fails) and publish.
    ///
    /// # Errors
    ///
    /// Returns the platform error unmodified when publishing fails.
    #[instrument(skip(self))]
    pub async fn cycle(&mut self) -> SocialResult<PostReceipt> {
        debug!("Fish consciousness stirring");
        let post = self.composer.compose(&mut rand::thread_rng()).await;
        self.platform.post(&post).await
    }

    async fn cycle_and_log(&mut self) {
        match self.cycle().await {
            Ok(receipt) => {
                info!(post_id = %receipt.id(), text = %receipt.text(), "Cycle complete")
            }
            Err(e) => error!(error = %e, "Publish failed, continuing to next cycle"),
        }
    }
}
