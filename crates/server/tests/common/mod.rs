//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the real router around a
//! production-wired pipeline whose model is a scripted mock, so the HTTP
//! surface can be exercised end to end without a model endpoint.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use claimwise_core::{load_config_from_str, testing::MockLlmClient, ClaimPipeline};
use claimwise_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use claimwise_core::testing::fixtures;

pub const BOUNDARY: &str = "claimwise-test-boundary";

/// Test fixture for API testing with a mock model.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_evaluate() {
///     let fixture = TestFixture::new().await;
///     fixture.llm.push_reply(fixtures::adjudication_reply("approved", "knee surgery")).await;
///
///     let response = fixture
///         .post_multipart("/evaluate", &[Part::text("query", "knee surgery"), Part::pdf(&["..."])])
///         .await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock model behind both the adjudicator and the semantic extractor
    pub llm: Arc<MockLlmClient>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

/// One part of a multipart form.
pub enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        bytes: Vec<u8>,
    },
}

impl Part {
    pub fn text(name: &str, value: &str) -> Self {
        Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn file(name: &str, filename: &str, bytes: Vec<u8>) -> Self {
        Part::File {
            name: name.to_string(),
            filename: filename.to_string(),
            bytes,
        }
    }

    /// The `file` field carrying a generated policy PDF.
    pub fn pdf(pages: &[&str]) -> Self {
        Self::file("file", "policy.pdf", fixtures::policy_pdf(pages))
    }
}

/// Encode parts as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/pdf\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub semantic_entities: bool,
    pub max_upload_bytes: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            semantic_entities: false,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl TestFixture {
    /// Create a new test fixture with default config.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let config = load_config_from_str(&format!(
            r#"
[server]
host = "127.0.0.1"
max_upload_bytes = {}

[llm]
provider = "anthropic"
model = "claude-3-haiku"
api_key = "test-secret-key"

[pipeline]
semantic_entities = {}
"#,
            test_config.max_upload_bytes, test_config.semantic_entities
        ))
        .expect("Failed to parse test config");

        let llm = Arc::new(MockLlmClient::new());
        let pipeline = ClaimPipeline::from_config(&config, Arc::clone(&llm) as _);
        let state = Arc::new(AppState::new(config, Arc::new(pipeline)));

        Self {
            router: create_router(state),
            llm,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a multipart form POST.
    pub async fn post_multipart(&self, path: &str, parts: &[Part]) -> TestResponse {
        self.post_raw(
            path,
            multipart_body(parts),
            &format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .await
    }

    /// Send a POST request with a raw body and custom content type.
    pub async fn post_raw(&self, path: &str, body: Vec<u8>, content_type: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}
