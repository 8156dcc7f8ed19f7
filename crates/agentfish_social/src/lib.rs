//! Social platform integrations for AgentFish.
//!
//! Defines the [`SocialPlatform`] seam the publish loop posts through, and
//! the one platform the bot ships with: X (formerly Twitter) via the v2
//! create-tweet endpoint with OAuth 1.0a user-context signing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod platform;
mod x;

pub use platform::{PostId, PostReceipt, SocialPlatform};
pub use x::{XClient, XCredentials};
