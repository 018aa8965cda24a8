//! HTTP client module
//!
//! Provides the HTTP client the collector issues page requests with.
//!
//! # Features
//!
//! - **Timeouts**: One per-request timeout for the whole client
//! - **No retries**: A failed request is reported to the caller as-is

mod client;

pub use client::{HttpClient, USER_AGENT};
