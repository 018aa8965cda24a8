//! HTTP echo server
//!
//! Answers every request, on any path and with any method, with a JSON
//! description of the request it received.

use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, Method, Uri, Version},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Log every request
    pub log_requests: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_requests: false,
        }
    }
}

/// Reflected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub remote_addr: String,
    pub method: String,
    pub uri: EchoUri,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

/// Request line details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoUri {
    pub proto: String,
    pub host: String,
    pub path: String,
    pub query_params: BTreeMap<String, Vec<String>>,
}

/// Build the echo router
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .fallback(echo)
        .with_state(Arc::new(config))
        .layer(TraceLayer::new_for_http())
}

/// Start the echo server and run until it fails
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on port {}", config.port);

    axum::serve(
        listener,
        router(config).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

async fn echo(
    State(config): State<Arc<ServerConfig>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
) -> Json<EchoResponse> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.host())
        .unwrap_or_default()
        .to_string();

    let mut query_params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if let Some(query) = uri.query() {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            query_params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }

    let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in &headers {
        header_map
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }

    let response = EchoResponse {
        remote_addr: connect_info
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_default(),
        method: method.to_string(),
        uri: EchoUri {
            proto: format!("{version:?}"),
            host,
            path: uri.path().to_string(),
            query_params,
        },
        headers: header_map,
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    if config.log_requests {
        info!(
            remote_addr = %response.remote_addr,
            headers = ?response.headers,
            body = %response.body,
            "{} {}",
            response.method,
            response.uri.path
        );
    }

    Json(response)
}
