//! Error types for the AgentFish bot.
//!
//! This crate provides the foundation error types used throughout the
//! AgentFish workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use agentfish_error::{AgentfishResult, ConfigError};
//!
//! fn load_settings() -> AgentfishResult<String> {
//!     Err(ConfigError::new("CLAUDE_API_KEY is not set"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod models;
mod social;
mod error;

pub use config::ConfigError;
pub use models::{AnthropicErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
pub use social::{SocialError, SocialErrorKind, SocialResult, XErrorKind};
pub use error::{AgentfishError, AgentfishErrorKind, AgentfishResult};
