//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, CrawlArgs};
use crate::cli::server::{serve, ServerConfig};
use crate::config::{CrawlerConfig, PartialConfig};
use crate::crawl::{build_sink, crawl};
use crate::error::Result;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Crawl(args) => self.crawl(args).await,
            Commands::Echo { port, log_requests } => {
                serve(ServerConfig {
                    port: *port,
                    log_requests: *log_requests,
                })
                .await
            }
        }
    }

    /// Resolve configuration from flags, file and environment
    fn load_config(&self, args: &CrawlArgs) -> Result<CrawlerConfig> {
        let file = match &args.config {
            Some(path) => PartialConfig::from_yaml_file(path)?,
            None => PartialConfig::default(),
        };
        CrawlerConfig::from_env(args.to_partial().or(file))
    }

    async fn crawl(&self, args: &CrawlArgs) -> Result<()> {
        let config = self.load_config(args)?;
        let sink = build_sink(&config.destination)?;
        let report = crawl(&config, sink.as_ref()).await?;
        info!(
            "ok! {} records, {} documents",
            report.total_records,
            report.locations.len()
        );
        Ok(())
    }
}
