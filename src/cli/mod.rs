//! CLI module
//!
//! Command-line interface for the crawler.
//!
//! # Commands
//!
//! - `crawl` - Snapshot a WordPress site into object storage
//! - `echo` - Start an HTTP echo server

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, CrawlArgs};
pub use runner::Runner;
pub use server::{router, serve, EchoResponse, EchoUri, ServerConfig};
