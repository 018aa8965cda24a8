//! Snapshot upload under a date-partitioned prefix

use crate::error::{Error, Result};
use crate::snapshot::SnapshotDocument;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Destination for serialized snapshot documents
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    /// Store `data` under `name`, returning where it went
    async fn put(&self, name: &str, data: Bytes) -> Result<String>;
}

/// Sink that logs documents instead of storing them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl SnapshotSink for LogSink {
    async fn put(&self, name: &str, data: Bytes) -> Result<String> {
        info!(object = name, "{}", String::from_utf8_lossy(&data));
        Ok(format!("log://{name}"))
    }
}

/// Date format of the per-run key prefix
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PathLayout {
    /// `YYYY/MM/DD`
    Date,
    /// `YYYY/MM/DD/HH/MM`
    #[default]
    DateTime,
}

impl PathLayout {
    /// Key prefix for a run started at `now`
    pub fn prefix(self, now: DateTime<Utc>) -> String {
        match self {
            PathLayout::Date => now.format("%Y/%m/%d").to_string(),
            PathLayout::DateTime => now.format("%Y/%m/%d/%H/%M").to_string(),
        }
    }

    /// Full object key of a document for a run started at `now`
    pub fn object_key(self, now: DateTime<Utc>, name: &str) -> String {
        format!("{}/{name}", self.prefix(now))
    }
}

/// Upload every document under one shared prefix
///
/// Documents are written one at a time; the first failure stops the upload.
pub async fn upload_snapshot(
    sink: &dyn SnapshotSink,
    documents: &[SnapshotDocument],
    layout: PathLayout,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    let mut locations = Vec::with_capacity(documents.len());
    for doc in documents {
        let key = layout.object_key(now, &doc.name);
        let location = sink
            .put(&key, doc.data.clone())
            .await
            .map_err(|e| Error::upload(&doc.name, e))?;
        info!("Uploaded {} ({} bytes)", location, doc.data.len());
        locations.push(location);
    }
    Ok(locations)
}
