//! Pagination module
//!
//! Page-number pagination against WordPress-style listing endpoints.
//!
//! # Overview
//!
//! [`PaginatedCollector`] walks a listing from page 1, appending each page to
//! an accumulator. A page shorter than the page size, or an
//! "invalid page number" API error, ends the listing successfully. Every
//! other failure aborts it.

mod collector;
mod types;

pub use collector::{decode_json_array, PaginatedCollector};
pub use types::{
    ApiErrorData, ApiErrorResponse, NextPage, PageNumberPaginator, PaginationState, StopReason,
    INVALID_PAGE_NUMBER_CODE,
};
