//! Output module
//!
//! Persists serialized snapshot documents.
//!
//! # Overview
//!
//! This module provides:
//! - The [`SnapshotSink`] seam and a debug [`LogSink`]
//! - Object store destinations (S3-compatible, local directory, memory)
//! - Date-partitioned object keys

mod cloud;
mod upload;

pub use cloud::CloudDestination;
pub use upload::{upload_snapshot, LogSink, PathLayout, SnapshotSink};
