//! Scheduled fish-post generation and publishing loop.
//!
//! This crate wires the provider and platform seams into the bot proper:
//! - **PostComposer**: produces one post per cycle, biased against
//!   repetition by a bounded memory of recent posts, with a canned
//!   fallback set absorbing every generation failure
//! - **Schedule** / **Clock**: jittered wake-time math behind a clock
//!   abstraction so tests never wait on real time
//! - **FishLoop**: the indefinite post-sleep-post cycle

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod generation;
mod memory;
mod persona;
mod posting;
mod schedule;

pub use config::{BotConfig, DEFAULT_POST_INTERVAL, JITTER_MAX};
pub use generation::PostComposer;
pub use memory::RecentPosts;
pub use persona::{FALLBACK_POSTS, PERSONA};
pub use posting::FishLoop;
pub use schedule::{Clock, Schedule, SystemClock};
