//! Integration tests using a mock WordPress server
//!
//! Tests the full end-to-end flow: paged REST API → snapshot → six JSON documents

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wp_crawler::config::{CrawlerConfig, Destination, PartialConfig};
use wp_crawler::crawl::{build_sink, crawl};
use wp_crawler::output::{CloudDestination, PathLayout};
use wp_crawler::{Error, ResourceKind};

// ============================================================================
// Helpers
// ============================================================================

fn posts(range: std::ops::Range<u64>) -> Value {
    Value::Array(
        range
            .map(|id| {
                json!({
                    "id": id,
                    "slug": format!("post-{id}"),
                    "title": {"rendered": format!("Post {id}")},
                    "status": "publish",
                    "type": "post"
                })
            })
            .collect(),
    )
}

async fn mount_page(server: &MockServer, kind: ResourceKind, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(kind.path()))
        .and(query_param("per_page", "10"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// A small site: 25 posts over three pages, everything else on one page
async fn mount_site(server: &MockServer) {
    mount_page(
        server,
        ResourceKind::Categories,
        1,
        json!([{"id": 1, "name": "Uncategorized", "slug": "uncategorized", "taxonomy": "category"}]),
    )
    .await;
    mount_page(server, ResourceKind::Comments, 1, json!([])).await;
    mount_page(
        server,
        ResourceKind::Pages,
        1,
        json!([{"id": 2, "slug": "about", "title": {"rendered": "About"}}]),
    )
    .await;
    mount_page(server, ResourceKind::Posts, 1, posts(0..10)).await;
    mount_page(server, ResourceKind::Posts, 2, posts(10..20)).await;
    mount_page(server, ResourceKind::Posts, 3, posts(20..25)).await;
    mount_page(
        server,
        ResourceKind::Tags,
        1,
        json!([{"id": 3, "name": "rust", "slug": "rust", "count": 25}]),
    )
    .await;
    mount_page(
        server,
        ResourceKind::Users,
        1,
        json!([{"id": 1, "name": "admin", "slug": "admin"}]),
    )
    .await;
}

fn config_for(server: &MockServer, output_dir: &Path) -> CrawlerConfig {
    let partial = PartialConfig {
        url: Some(server.uri()),
        output_dir: Some(output_dir.to_path_buf()),
        path_layout: Some(PathLayout::Date),
        ..Default::default()
    };
    CrawlerConfig::resolve(partial, |_| None).unwrap()
}

fn written_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(
                    path.strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .into_owned(),
                );
            }
        }
    }
    files.sort();
    files
}

// ============================================================================
// End-to-end Tests
// ============================================================================

#[tokio::test]
async fn test_crawl_to_local_directory() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, temp_dir.path());
    assert_eq!(
        config.destination,
        Destination::Local(temp_dir.path().to_path_buf())
    );

    let sink = build_sink(&config.destination).unwrap();
    let report = crawl(&config, sink.as_ref()).await.unwrap();

    assert_eq!(report.total_records, 29);
    assert_eq!(report.locations.len(), 6);

    let files = written_files(temp_dir.path());
    assert_eq!(files.len(), 6);
    let prefix = Path::new(&files[0]).parent().unwrap().to_path_buf();
    let names: Vec<String> = files
        .iter()
        .map(|f| {
            let f = Path::new(f);
            assert_eq!(f.parent().unwrap(), prefix, "all documents share a prefix");
            f.file_name().unwrap().to_string_lossy().into_owned()
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "categories.json",
            "comments.json",
            "pages.json",
            "posts.json",
            "tags.json",
            "users.json"
        ]
    );

    let snapshot_dir = temp_dir.path().join(&prefix);
    let posts_doc: Vec<Value> =
        serde_json::from_slice(&std::fs::read(snapshot_dir.join("posts.json")).unwrap()).unwrap();
    let ids: Vec<u64> = posts_doc.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (0..25).collect::<Vec<_>>());
    assert_eq!(posts_doc[24]["title"]["rendered"], "Post 24");

    let comments_doc = std::fs::read(snapshot_dir.join("comments.json")).unwrap();
    assert_eq!(comments_doc, b"[]");
}

#[tokio::test]
async fn test_crawl_failure_writes_nothing() {
    let server = MockServer::start().await;

    mount_page(&server, ResourceKind::Categories, 1, json!([])).await;
    mount_page(&server, ResourceKind::Comments, 1, json!([])).await;

    Mock::given(method("GET"))
        .and(path(ResourceKind::Pages.path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "rest_forbidden_context",
            "message": "Sorry, you are not allowed to edit posts in this post type.",
            "data": {"status": 401}
        })))
        .mount(&server)
        .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, temp_dir.path());
    let sink = CloudDestination::local(temp_dir.path()).unwrap();

    let err = crawl(&config, &sink).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Resource {
            kind: ResourceKind::Pages,
            ..
        }
    ));
    assert!(written_files(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_crawl_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = config_for(&server, temp_dir.path());
    config.timeout = Duration::from_millis(200);

    let sink = CloudDestination::in_memory();
    let err = crawl(&config, &sink).await.unwrap_err();

    assert!(matches!(err, Error::CrawlTimeout { .. }));
}

#[tokio::test]
async fn test_crawl_to_object_store() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = config_for(&server, temp_dir.path());
    config.path_layout = PathLayout::DateTime;

    let sink = CloudDestination::in_memory();
    let report = crawl(&config, &sink).await.unwrap();

    for (location, kind) in report.locations.iter().zip(ResourceKind::ALL) {
        assert!(location.starts_with("memory://"));
        assert!(location.ends_with(&kind.file_name()));
        // memory://YYYY/MM/DD/HH/MM/<kind>.json
        assert_eq!(location.trim_start_matches("memory://").split('/').count(), 6);
    }
}
