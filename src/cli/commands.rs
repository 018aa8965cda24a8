//! CLI commands and argument parsing

use crate::config::PartialConfig;
use crate::output::PathLayout;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// WordPress snapshot crawler
#[derive(Parser, Debug)]
#[command(name = "wp-crawler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a WordPress site and upload one JSON document per resource kind
    Crawl(CrawlArgs),

    /// Start an HTTP server that echoes request metadata as JSON
    Echo {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Log every request
        #[arg(long)]
        log_requests: bool,
    },
}

/// Arguments of the `crawl` command
///
/// Credentials are read from `MINIO_ACCESS_KEY_ID` and
/// `MINIO_SECRET_ACCESS_KEY`.
#[derive(Args, Debug, Default)]
pub struct CrawlArgs {
    /// Configuration file (YAML); flags take precedence
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// URL of the WordPress site to crawl
    #[arg(long)]
    pub url: Option<String>,

    /// Timeout for the whole crawl, in seconds [default: 300]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Timeout for each HTTP request, in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub http_timeout: Option<u64>,

    /// Records requested per page [default: 10]
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Object store endpoint (host:port or URL)
    #[arg(long)]
    pub minio_endpoint: Option<String>,

    /// Object store region
    #[arg(long)]
    pub minio_region: Option<String>,

    /// Object store bucket
    #[arg(long)]
    pub minio_bucket: Option<String>,

    /// Timeout for object store requests, in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub minio_http_timeout: Option<u64>,

    /// Use https for a scheme-less object store endpoint
    #[arg(long)]
    pub minio_ssl: bool,

    /// Date layout of the object key prefix [default: date-time]
    #[arg(long, value_enum)]
    pub path_layout: Option<PathLayout>,

    /// Write documents to a local directory instead of the object store
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Log documents instead of uploading them
    #[arg(long)]
    pub debug_output: bool,
}

impl CrawlArgs {
    /// Settings given on the command line
    ///
    /// Boolean flags only count when passed.
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            url: self.url.clone(),
            timeout_secs: self.timeout,
            http_timeout_secs: self.http_timeout,
            page_size: self.page_size,
            path_layout: self.path_layout,
            output_dir: self.output_dir.clone(),
            debug_output: self.debug_output.then_some(true),
            minio_endpoint: self.minio_endpoint.clone(),
            minio_region: self.minio_region.clone(),
            minio_bucket: self.minio_bucket.clone(),
            minio_http_timeout_secs: self.minio_http_timeout,
            minio_ssl: self.minio_ssl.then_some(true),
        }
    }
}
