//! Common types used throughout wp-crawler
//!
//! This module contains shared type definitions and constants used
//! across the collector, snapshot and output modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Versioned root of the WordPress REST API
pub const API_ROOT: &str = "/wp-json/wp/v2";

/// Number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Content type of every uploaded snapshot document
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// Resource Kinds
// ============================================================================

/// One of the six WordPress entity types fetched independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Categories,
    Comments,
    Pages,
    Posts,
    Tags,
    Users,
}

impl ResourceKind {
    /// All kinds, in the order a crawl fetches them
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Categories,
        ResourceKind::Comments,
        ResourceKind::Pages,
        ResourceKind::Posts,
        ResourceKind::Tags,
        ResourceKind::Users,
    ];

    /// Logical name of the kind (also its URL suffix)
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Categories => "categories",
            ResourceKind::Comments => "comments",
            ResourceKind::Pages => "pages",
            ResourceKind::Posts => "posts",
            ResourceKind::Tags => "tags",
            ResourceKind::Users => "users",
        }
    }

    /// Listing path under the site root, e.g. `/wp-json/wp/v2/posts`
    pub fn path(self) -> String {
        format!("{API_ROOT}/{}", self.name())
    }

    /// Name of the serialized snapshot document, e.g. `posts.json`
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
