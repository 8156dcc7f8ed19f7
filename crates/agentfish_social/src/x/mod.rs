//! X (Twitter) platform implementation.

mod client;
mod oauth;

pub use client::{XClient, XCredentials};
