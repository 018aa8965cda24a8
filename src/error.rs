//! Error types for wp-crawler
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::ResourceKind;
use thiserror::Error;

/// The main error type for wp-crawler
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // WordPress API Errors
    // ============================================================================
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to get {kind}: {source}")]
    Resource {
        kind: ResourceKind,
        #[source]
        source: Box<Error>,
    },

    #[error("Crawl did not finish within {timeout_secs}s")]
    CrawlTimeout { timeout_secs: u64 },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize {kind}: {source}")]
    Serialize {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to upload {name}: {source}")]
    Upload {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error for the JSON described by `context`
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Wrap an error with the resource kind that was being fetched
    pub fn resource(kind: ResourceKind, source: Error) -> Self {
        Self::Resource {
            kind,
            source: Box::new(source),
        }
    }

    /// Wrap an error with the document that failed to upload
    pub fn upload(name: impl Into<String>, source: Error) -> Self {
        Self::Upload {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Result type alias for wp-crawler
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("url");
        assert_eq!(err.to_string(), "Missing required config field: url");

        let err = Error::http_status(502, "Bad gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad gateway");
    }

    #[test]
    fn test_resource_error_names_kind() {
        let err = Error::resource(ResourceKind::Comments, Error::http_status(500, ""));
        assert_eq!(err.to_string(), "Failed to get comments: HTTP 500: ");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "HTTP 500: ");
    }

    #[test]
    fn test_upload_error_keeps_source() {
        let err = Error::upload("posts.json", Error::storage("bucket missing"));
        assert_eq!(
            err.to_string(),
            "Failed to upload posts.json: Storage error: bucket missing"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Storage error: bucket missing");
    }

    #[test]
    fn test_decode_error_names_context() {
        let json_err = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        let err = Error::decode("page body", json_err);
        assert!(err.to_string().starts_with("Failed to decode page body: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 400,
            code: "rest_invalid_param".to_string(),
            message: "Invalid parameter(s): per_page".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error rest_invalid_param (HTTP 400): Invalid parameter(s): per_page"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
