// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # wp-crawler
//!
//! Snapshots a WordPress site through its REST API.
//!
//! Each of the six resource kinds (categories, comments, pages, posts, tags,
//! users) is paged through in turn, gathered into a [`SiteSnapshot`], and
//! written out as one JSON array per kind under a date-partitioned prefix
//! in an S3-compatible object store.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wp_crawler::{wordpress::WordPressClient, Result};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let url = url::Url::parse("https://blog.example.com")?;
//!     let client = WordPressClient::new(url, Duration::from_secs(10))?;
//!
//!     let snapshot = client.get_all().await?;
//!     for doc in snapshot.to_documents()? {
//!         println!("{}: {} bytes", doc.name, doc.data.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         crawl()                           │
//! └───────────────────────────────────────────────────────────┘
//!          │                     │                     │
//! ┌────────┴────────┐   ┌────────┴────────┐   ┌────────┴────────┐
//! │ WordPressClient │   │  SiteSnapshot   │   │  SnapshotSink   │
//! │ one kind at a   │──▶│ six accumulators│──▶│ S3 / local dir  │
//! │ time            │   │ → six documents │   │ / debug log     │
//! └────────┬────────┘   └─────────────────┘   └─────────────────┘
//!          │
//! ┌────────┴───────────┐
//! │ PaginatedCollector │ page=1,2,… until short page or
//! │ over HttpClient    │ rest_post_invalid_page_number
//! └────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and constants
pub mod types;

/// HTTP client
pub mod http;

/// Paginated collection
pub mod pagination;

/// WordPress records and site collector
pub mod wordpress;

/// Site snapshot and serialization
pub mod snapshot;

/// Snapshot upload destinations
pub mod output;

/// Crawler configuration
pub mod config;

/// Crawl orchestration
pub mod crawl;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use snapshot::{SiteSnapshot, SnapshotDocument};
pub use types::{ResourceKind, DEFAULT_PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
