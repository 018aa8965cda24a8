//! Pagination types
//!
//! Page-number bookkeeping and the API error body that signals the end of
//! a listing.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Error code WordPress returns for a page past the last one
pub const INVALID_PAGE_NUMBER_CODE: &str = "rest_post_invalid_page_number";

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "per_page";

/// Listings start at page 1
pub const FIRST_PAGE: u32 = 1;

/// Why a listing finished successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page came back with fewer records than the page size
    ShortPage,
    /// The API rejected the page number as past the end
    InvalidPageNumber,
}

/// Result of processing one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Request the following page
    Continue,
    /// No more pages
    Done(StopReason),
}

/// Tracks pagination state during one listing fetch
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Current page number
    pub page: u32,
    /// Number of requests issued
    pub requests: u32,
}

/// Page number pagination with a fixed, non-zero page size
///
/// Query: `?per_page={size}&page={n}`, starting at page 1.
/// A page with fewer than `page_size` records ends the listing.
#[derive(Debug, Clone, Copy)]
pub struct PageNumberPaginator {
    page_size: NonZeroU32,
}

impl PageNumberPaginator {
    /// Create a paginator requesting `page_size` records per page
    ///
    /// A page size of zero is rejected: no page could ever come back short.
    pub fn new(page_size: u32) -> Result<Self> {
        let page_size = NonZeroU32::new(page_size)
            .ok_or_else(|| Error::invalid_value("page_size", "must be at least 1"))?;
        Ok(Self { page_size })
    }

    /// Records requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size.get()
    }

    /// Initial state for a fresh listing
    pub fn initial_state(&self) -> PaginationState {
        PaginationState {
            page: FIRST_PAGE,
            requests: 0,
        }
    }

    /// Query parameters for the current page
    pub fn query_params(&self, state: &PaginationState) -> [(&'static str, String); 2] {
        [
            (PAGE_SIZE_PARAM, self.page_size.to_string()),
            (PAGE_PARAM, state.page.to_string()),
        ]
    }

    /// Process a successful page and decide whether to continue
    pub fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        if records_count < self.page_size.get() as usize {
            return NextPage::Done(StopReason::ShortPage);
        }

        state.page += 1;
        NextPage::Continue
    }

    /// Record that the API reported the page as past the end
    pub fn process_invalid_page(&self) -> NextPage {
        NextPage::Done(StopReason::InvalidPageNumber)
    }
}

/// Error body returned by the WordPress REST API
///
/// `{"code": "...", "message": "...", "data": {"status": 400}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: ApiErrorData,
}

/// `data` member of an API error body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorData {
    #[serde(default)]
    pub status: u16,
}

impl ApiErrorResponse {
    /// Whether this error means "past the last page"
    pub fn is_invalid_page_number(&self) -> bool {
        self.code == INVALID_PAGE_NUMBER_CODE
    }
}
