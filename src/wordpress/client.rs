//! WordPress site collector
//!
//! Runs the paginated collector once per resource kind to build a
//! [`SiteSnapshot`].

use super::types::{Category, Comment, Page, Post, Tag, User};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::PaginatedCollector;
use crate::snapshot::SiteSnapshot;
use crate::types::{ResourceKind, DEFAULT_PAGE_SIZE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Client for one WordPress site's REST API
#[derive(Debug, Clone)]
pub struct WordPressClient {
    http: HttpClient,
    site_url: Url,
    page_size: u32,
}

impl WordPressClient {
    /// Create a client for `site_url` with the given per-request timeout
    pub fn new(site_url: Url, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(timeout)?,
            site_url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Set the number of records requested per page
    ///
    /// Zero is not checked here; every fetch then fails before sending a
    /// request.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Full listing URL for a resource kind
    pub fn listing_url(&self, kind: ResourceKind) -> String {
        let base = self.site_url.as_str().trim_end_matches('/');
        format!("{base}{}", kind.path())
    }

    /// Fetch every resource kind in order
    ///
    /// Stops at the first failing kind; nothing is returned in that case.
    pub async fn get_all(&self) -> Result<SiteSnapshot> {
        let snapshot = SiteSnapshot {
            categories: self.get_categories().await?,
            comments: self.get_comments().await?,
            pages: self.get_pages().await?,
            posts: self.get_posts().await?,
            tags: self.get_tags().await?,
            users: self.get_users().await?,
        };
        info!(counts = ?snapshot.record_counts(), "site snapshot collected");
        Ok(snapshot)
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.fetch(ResourceKind::Categories).await
    }

    pub async fn get_comments(&self) -> Result<Vec<Comment>> {
        self.fetch(ResourceKind::Comments).await
    }

    pub async fn get_pages(&self) -> Result<Vec<Page>> {
        self.fetch(ResourceKind::Pages).await
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        self.fetch(ResourceKind::Posts).await
    }

    pub async fn get_tags(&self) -> Result<Vec<Tag>> {
        self.fetch(ResourceKind::Tags).await
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.fetch(ResourceKind::Users).await
    }

    /// Fetch all records of one kind
    pub async fn fetch<T: DeserializeOwned>(&self, kind: ResourceKind) -> Result<Vec<T>> {
        info!("Fetching {}", kind);
        let collector = PaginatedCollector::new(&self.http, self.page_size)
            .map_err(|e| Error::resource(kind, e))?;
        collector
            .collect_json(&self.listing_url(kind))
            .await
            .map_err(|e| Error::resource(kind, e))
    }
}
