//! HTTP client for paged listing endpoints
//!
//! Responses are returned for every status code; callers classify them.
//! There are no retries: a transport failure is final.

use crate::error::{Error, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("wp-crawler/", env!("CARGO_PKG_VERSION"));

/// HTTP client used by the collector
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// GET `url` with `query` appended in order
    ///
    /// Any HTTP status is returned as `Ok`; only transport failures are errors.
    pub async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        match self.client.get(url).query(query).send().await {
            Ok(response) => {
                debug!("GET {} -> {}", response.url(), response.status().as_u16());
                Ok(response)
            }
            Err(e) if e.is_timeout() => Err(Error::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
            Err(e) => Err(Error::Http(e)),
        }
    }
}
