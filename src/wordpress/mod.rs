//! WordPress REST API client
//!
//! Typed records for the six resource kinds and the site collector that
//! fetches them.

mod client;
mod types;

pub use client::WordPressClient;
pub use types::{Category, Comment, Href, Links, Page, Post, Rendered, Tag, User};
