//! Crawler configuration
//!
//! Settings come from three places, highest precedence first:
//! command-line flags, an optional YAML file, and built-in defaults.
//! Store credentials are read from the environment only.
//!
//! Everything is resolved and validated once into a [`CrawlerConfig`],
//! which is immutable for the rest of the run.

use crate::error::{Error, Result, ResultExt};
use crate::output::PathLayout;
use crate::types::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

// ============================================================================
// Defaults
// ============================================================================

/// Environment variable holding the object store access key
pub const ACCESS_KEY_ID_ENV: &str = "MINIO_ACCESS_KEY_ID";

/// Environment variable holding the object store secret key
pub const SECRET_ACCESS_KEY_ENV: &str = "MINIO_SECRET_ACCESS_KEY";

/// Overall crawl timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Per-request timeout against the WordPress site
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout against the object store
pub const DEFAULT_STORE_HTTP_TIMEOUT_SECS: u64 = 10;

/// Largest `per_page` WordPress accepts
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Partial Config (file and flags)
// ============================================================================

/// Unresolved settings, as read from a YAML file or command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    /// WordPress site root
    pub url: Option<String>,
    /// Overall crawl timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Per-request timeout in seconds
    pub http_timeout_secs: Option<u64>,
    /// Records requested per page
    pub page_size: Option<u32>,
    /// Date format of the object key prefix
    pub path_layout: Option<PathLayout>,
    /// Write documents to this directory instead of the object store
    pub output_dir: Option<PathBuf>,
    /// Log documents instead of uploading them
    pub debug_output: Option<bool>,
    /// Object store endpoint (`host:port` or full URL)
    pub minio_endpoint: Option<String>,
    /// Object store region
    pub minio_region: Option<String>,
    /// Object store bucket
    pub minio_bucket: Option<String>,
    /// Object store request timeout in seconds
    pub minio_http_timeout_secs: Option<u64>,
    /// Use https for a scheme-less endpoint
    pub minio_ssl: Option<bool>,
}

impl PartialConfig {
    /// Load settings from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Fill unset fields from `base`
    #[must_use]
    pub fn or(self, base: PartialConfig) -> PartialConfig {
        PartialConfig {
            url: self.url.or(base.url),
            timeout_secs: self.timeout_secs.or(base.timeout_secs),
            http_timeout_secs: self.http_timeout_secs.or(base.http_timeout_secs),
            page_size: self.page_size.or(base.page_size),
            path_layout: self.path_layout.or(base.path_layout),
            output_dir: self.output_dir.or(base.output_dir),
            debug_output: self.debug_output.or(base.debug_output),
            minio_endpoint: self.minio_endpoint.or(base.minio_endpoint),
            minio_region: self.minio_region.or(base.minio_region),
            minio_bucket: self.minio_bucket.or(base.minio_bucket),
            minio_http_timeout_secs: self
                .minio_http_timeout_secs
                .or(base.minio_http_timeout_secs),
            minio_ssl: self.minio_ssl.or(base.minio_ssl),
        }
    }
}

// ============================================================================
// Resolved Config
// ============================================================================

/// S3-compatible object store settings
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Endpoint, `host:port` or a full URL
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Request timeout against the store
    pub http_timeout: Duration,
    /// Use https when the endpoint has no scheme
    pub use_ssl: bool,
}

impl StoreConfig {
    /// Endpoint as a URL, adding a scheme when missing
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            let scheme = if self.use_ssl { "https" } else { "http" };
            format!("{scheme}://{}", self.endpoint)
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("http_timeout", &self.http_timeout)
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}

/// Where the snapshot documents go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Log the documents (debug mode)
    Log,
    /// Write into a local directory
    Local(PathBuf),
    /// Upload to an object store
    Store(StoreConfig),
}

/// Validated crawler settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    /// WordPress site root
    pub site_url: Url,
    /// Overall crawl timeout
    pub timeout: Duration,
    /// Per-request timeout against the site
    pub http_timeout: Duration,
    /// Records requested per page
    pub page_size: u32,
    /// Date format of the object key prefix
    pub path_layout: PathLayout,
    pub destination: Destination,
}

impl CrawlerConfig {
    /// Resolve settings, reading credentials with `env`
    ///
    /// Store settings are only required when uploading to the store.
    pub fn resolve<F>(partial: PartialConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = non_empty(partial.url).ok_or_else(|| Error::missing_field("url"))?;
        let site_url = Url::parse(&raw_url)?;
        if !matches!(site_url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "url",
                format!("unsupported scheme '{}'", site_url.scheme()),
            ));
        }

        let timeout = seconds("timeout", partial.timeout_secs, DEFAULT_TIMEOUT_SECS)?;
        let http_timeout = seconds(
            "http-timeout",
            partial.http_timeout_secs,
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        let page_size = partial.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page-size",
                format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
            ));
        }

        let destination = if partial.debug_output.unwrap_or(false) {
            Destination::Log
        } else if let Some(dir) = partial.output_dir {
            Destination::Local(dir)
        } else {
            Destination::Store(StoreConfig {
                endpoint: non_empty(partial.minio_endpoint)
                    .ok_or_else(|| Error::missing_field("minio-endpoint"))?,
                region: non_empty(partial.minio_region)
                    .ok_or_else(|| Error::missing_field("minio-region"))?,
                bucket: non_empty(partial.minio_bucket)
                    .ok_or_else(|| Error::missing_field("minio-bucket"))?,
                access_key_id: non_empty(env(ACCESS_KEY_ID_ENV))
                    .ok_or_else(|| Error::missing_field(ACCESS_KEY_ID_ENV))?,
                secret_access_key: non_empty(env(SECRET_ACCESS_KEY_ENV))
                    .ok_or_else(|| Error::missing_field(SECRET_ACCESS_KEY_ENV))?,
                http_timeout: seconds(
                    "minio-http-timeout",
                    partial.minio_http_timeout_secs,
                    DEFAULT_STORE_HTTP_TIMEOUT_SECS,
                )?,
                use_ssl: partial.minio_ssl.unwrap_or(false),
            })
        };

        Ok(Self {
            site_url,
            timeout,
            http_timeout,
            page_size,
            path_layout: partial.path_layout.unwrap_or_default(),
            destination,
        })
    }

    /// Resolve settings from the process environment
    pub fn from_env(partial: PartialConfig) -> Result<Self> {
        Self::resolve(partial, |key| std::env::var(key).ok())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn seconds(field: &str, value: Option<u64>, default: u64) -> Result<Duration> {
    match value.unwrap_or(default) {
        0 => Err(Error::invalid_value(field, "must be greater than zero")),
        secs => Ok(Duration::from_secs(secs)),
    }
}
