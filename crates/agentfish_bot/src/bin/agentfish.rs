//! AgentFish daemon - posts fish transmissions to X on a jittered schedule.

use agentfish_bot::{BotConfig, FishLoop, JITTER_MAX, PostComposer, Schedule, SystemClock};
use agentfish_models::{AnthropicClient, DEFAULT_MODEL};
use agentfish_social::XClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A .env file is optional; deployed environments set variables directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("AgentFish is awakening from the depths");

    let config = BotConfig::from_env()?;
    info!(
        model = DEFAULT_MODEL,
        post_interval_ms = config.post_interval.as_millis() as u64,
        jitter_max_ms = JITTER_MAX.as_millis() as u64,
        "Configuration loaded"
    );

    let schedule = Schedule::new(config.post_interval, JITTER_MAX);
    let driver = AnthropicClient::new(&config.claude_api_key, DEFAULT_MODEL);
    let platform = XClient::new(config.x_credentials)?;

    let mut fish = FishLoop::new(PostComposer::new(driver), platform, schedule, SystemClock);

    info!("Press Ctrl+C to return the fish to slumber");

    tokio::select! {
        _ = fish.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, the fish returns to slumber");
        }
    }

    Ok(())
}
