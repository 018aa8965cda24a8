//! Paginated fetch-and-aggregate loop
//!
//! Requests page after page of a listing endpoint, decodes each page and
//! appends the records to one accumulator until the listing ends.

use super::types::{ApiErrorResponse, NextPage, PageNumberPaginator, StopReason};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Fetches every record of one listing endpoint
#[derive(Debug, Clone)]
pub struct PaginatedCollector<'a> {
    client: &'a HttpClient,
    paginator: PageNumberPaginator,
}

impl<'a> PaginatedCollector<'a> {
    /// Create a collector requesting `page_size` records per page
    ///
    /// Fails with [`Error::InvalidConfigValue`] when `page_size` is zero.
    pub fn new(client: &'a HttpClient, page_size: u32) -> Result<Self> {
        Ok(Self {
            client,
            paginator: PageNumberPaginator::new(page_size)?,
        })
    }

    /// Collect all pages, decoding each 200 body with `decode`
    ///
    /// - 200: records are appended; a page shorter than the page size ends
    ///   the listing.
    /// - 400 with `rest_post_invalid_page_number`: the listing ended.
    /// - Anything else is fatal and the records gathered so far are dropped.
    pub async fn collect<T, F>(&self, url: &str, decode: F) -> Result<Vec<T>>
    where
        F: Fn(&[u8]) -> Result<Vec<T>>,
    {
        let mut records = Vec::new();
        let mut state = self.paginator.initial_state();

        loop {
            debug!("paginated request page {}: GET {}", state.page, url);
            state.requests += 1;
            let response = self
                .client
                .get(url, &self.paginator.query_params(&state))
                .await?;
            let status = response.status();

            let next = match status {
                StatusCode::OK => {
                    let body = response.bytes().await?;
                    let page = decode(&body[..])?;
                    let count = page.len();
                    records.extend(page);
                    self.paginator.process_page(count, &mut state)
                }
                StatusCode::BAD_REQUEST => {
                    let body = response.bytes().await?;
                    let api_error: ApiErrorResponse = serde_json::from_slice(&body)
                        .map_err(|e| Error::decode("error response", e))?;
                    if !api_error.is_invalid_page_number() {
                        warn!(code = %api_error.code, "bad request from {}", url);
                        return Err(Error::Api {
                            status: status.as_u16(),
                            code: api_error.code,
                            message: api_error.message,
                        });
                    }
                    self.paginator.process_invalid_page()
                }
                _ => {
                    let body = match response.text().await {
                        Ok(body) => body,
                        Err(e) => {
                            debug!("could not read {} body from {}: {}", status, url, e);
                            String::new()
                        }
                    };
                    return Err(Error::http_status(status.as_u16(), body));
                }
            };

            if let NextPage::Done(reason) = next {
                match reason {
                    StopReason::ShortPage => debug!("short page, listing complete"),
                    StopReason::InvalidPageNumber => debug!("got invalid page number error"),
                }
                info!(
                    "Collected {} records from {} in {} requests",
                    records.len(),
                    url,
                    state.requests
                );
                return Ok(records);
            }
        }
    }

    /// Collect all pages, decoding each body as a JSON array of `T`
    pub async fn collect_json<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        self.collect(url, decode_json_array::<T>).await
    }
}

/// Decode a page body as a JSON array of records
pub fn decode_json_array<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(body).map_err(|e| Error::decode("page body", e))
}
