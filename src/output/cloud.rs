//! Object storage destinations (S3-compatible, local filesystem, memory)

use super::upload::SnapshotSink;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::types::JSON_CONTENT_TYPE;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use object_store::{
    Attribute, AttributeValue, Attributes, ClientOptions, ObjectStore, PutOptions, PutPayload,
};
use std::path::Path;
use std::sync::Arc;

/// Object store the snapshot documents are written to
#[derive(Debug, Clone)]
pub struct CloudDestination {
    /// The object store implementation
    pub(super) store: Arc<dyn ObjectStore>,
    /// Root of the returned locations, e.g. `s3://bucket/`
    root: String,
    /// Content type attribute set on written objects
    content_type: Option<String>,
}

impl CloudDestination {
    /// Connect to an S3-compatible store such as MinIO
    ///
    /// Uses path-style requests against the configured endpoint with static
    /// credentials.
    pub fn s3(config: &StoreConfig) -> Result<Self> {
        let endpoint = config.endpoint_url();
        let allow_http = endpoint.starts_with("http://");

        let store = AmazonS3Builder::new()
            .with_endpoint(&endpoint)
            .with_region(&config.region)
            .with_bucket_name(&config.bucket)
            .with_access_key_id(&config.access_key_id)
            .with_secret_access_key(&config.secret_access_key)
            .with_allow_http(allow_http)
            .with_client_options(ClientOptions::new().with_timeout(config.http_timeout))
            .build()
            .map_err(|e| Error::config(format!("Failed to create s3 client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            root: format!("s3://{}/", config.bucket),
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
        })
    }

    /// Write into a local directory, creating it if missing
    pub fn local(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(|e| {
            Error::config(format!("Failed to create directory {}: {e}", path.display()))
        })?;

        let store = LocalFileSystem::new_with_prefix(path)
            .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            root: "file://".to_string(),
            content_type: None,
        })
    }

    /// Keep documents in memory
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemory::new()),
            root: "memory://".to_string(),
            content_type: None,
        }
    }

    /// Write bytes to a file in the destination
    pub async fn write(&self, filename: &str, data: Bytes) -> Result<String> {
        let path = ObjectPath::from(filename);

        let mut attributes = Attributes::new();
        if let Some(content_type) = &self.content_type {
            attributes.insert(
                Attribute::ContentType,
                AttributeValue::from(content_type.clone()),
            );
        }
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&path, PutPayload::from(data), opts)
            .await
            .map_err(|e| Error::storage(format!("Failed to write {path}: {e}")))?;

        Ok(format!("{}{path}", self.root))
    }
}

#[async_trait]
impl SnapshotSink for CloudDestination {
    async fn put(&self, name: &str, data: Bytes) -> Result<String> {
        self.write(name, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_in_memory_write_and_read_back() {
        let dest = CloudDestination::in_memory();
        let location = dest
            .write("2024/01/02/posts.json", Bytes::from_static(b"[]"))
            .await
            .unwrap();
        assert_eq!(location, "memory://2024/01/02/posts.json");

        let stored = dest
            .store
            .get(&ObjectPath::from("2024/01/02/posts.json"))
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        assert_eq!(&stored[..], b"[]");
    }

    #[tokio::test]
    async fn test_local_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("snapshots");
        let dest = CloudDestination::local(&root).unwrap();
        let location = dest
            .write("2024/01/02/users.json", Bytes::from_static(b"[{\"id\":1}]"))
            .await
            .unwrap();
        assert_eq!(location, "file://2024/01/02/users.json");

        let written = std::fs::read(root.join("2024/01/02/users.json")).unwrap();
        assert_eq!(written, b"[{\"id\":1}]");
    }

    #[test]
    fn test_s3_destination_from_config() {
        let config = StoreConfig {
            endpoint: "localhost:9000".to_string(),
            region: "us-east-1".to_string(),
            bucket: "wordpress".to_string(),
            access_key_id: "minio".to_string(),
            secret_access_key: "minio-secret".to_string(),
            http_timeout: Duration::from_secs(10),
            use_ssl: false,
        };
        let dest = CloudDestination::s3(&config).unwrap();
        assert_eq!(dest.root, "s3://wordpress/");
        assert_eq!(dest.content_type.as_deref(), Some("application/json"));
    }
}
