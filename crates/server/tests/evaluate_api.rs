//! HTTP API tests driven in-process through the router.

mod common;

use axum::http::StatusCode;
use claimwise_core::llm::LlmError;
use common::{fixtures, Part, TestConfig, TestFixture};
use serde_json::json;

const QUERY: &str = "45 year old patient needs knee surgery in Mumbai, policy active for 8 months";

fn reference_form() -> Vec<Part> {
    vec![
        Part::text("query", QUERY),
        Part::pdf(&[
            "Section 1: Definitions",
            "Section 4: knee surgery is covered up to Rs 80,000",
        ]),
    ]
}

#[tokio::test]
async fn test_root_reports_liveness() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"message": "LLM Claims API is up and running!"})
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["adjudicator"], "mock");
}

#[tokio::test]
async fn test_config_endpoint_hides_api_key() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["llm"]["provider"], "anthropic");
    assert_eq!(response.body["llm"]["api_key_configured"], true);
    assert_eq!(response.body["rules"]["approved_amount"], "₹80,000");
    assert!(!response.text.contains("test-secret-key"));
}

#[tokio::test]
async fn test_evaluate_reference_claim() {
    let fixture = TestFixture::new().await;
    fixture
        .llm
        .push_reply(fixtures::adjudication_reply(
            "approved",
            "knee surgery is covered up to ₹80,000",
        ))
        .await;

    let response = fixture.post_multipart("/evaluate", &reference_form()).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["decision"], "approved");
    assert_eq!(body["matched_clause"], "knee surgery is covered up to ₹80,000");
    assert_eq!(
        body["parsed_query"],
        json!({
            "age": 45,
            "procedure": "knee surgery",
            "location": "mumbai",
            "policy_duration": "8 month",
        })
    );
    assert_eq!(
        body["rule_based_decision"],
        json!({
            "decision": "approved",
            "justification": "Knee surgery is covered under the policy. Clause matched.",
            "amount": "₹80,000",
        })
    );

    let requests = fixture.llm.recorded_requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].prompt.contains("knee surgery is covered up to Rs 80,000"));
}

#[tokio::test]
async fn test_versioned_evaluate_route() {
    let fixture = TestFixture::new().await;
    fixture
        .llm
        .push_reply(fixtures::adjudication_reply("rejected", ""))
        .await;

    let response = fixture
        .post_multipart("/api/v1/evaluate", &reference_form())
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["decision"], "rejected");
    assert_eq!(response.body["rule_based_decision"]["decision"], "rejected");
}

#[tokio::test]
async fn test_adjudicator_failure_still_returns_full_result() {
    let fixture = TestFixture::new().await;
    fixture
        .llm
        .push_error(LlmError::Http("connection refused".to_string()))
        .await;

    let response = fixture.post_multipart("/evaluate", &reference_form()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("error").is_none());
    assert_eq!(response.body["decision"], "rejected");
    assert_eq!(
        response.body["justification"],
        "Mock Error: HTTP error: connection refused"
    );
    assert_eq!(response.body["amount"], "₹0");
    assert_eq!(response.body["similarity_score"], 0.0);
    assert_eq!(response.body["parsed_query"]["age"], 45);
}

#[tokio::test]
async fn test_unreadable_upload_is_evaluated_with_empty_text() {
    let fixture = TestFixture::new().await;
    fixture
        .llm
        .push_reply(fixtures::adjudication_reply("rejected", ""))
        .await;

    let response = fixture
        .post_multipart(
            "/evaluate",
            &[
                Part::text("query", QUERY),
                Part::file("file", "policy.pdf", b"garbage bytes".to_vec()),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["rule_based_decision"]["justification"],
        "Unable to match clause or detect procedure from query."
    );
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let fixture = TestFixture::new().await;
    let response = fixture
        .post_multipart("/evaluate", &[Part::pdf(&["knee surgery"])])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "Missing form field: query"}));
    assert_eq!(fixture.llm.request_count().await, 0);
}

#[tokio::test]
async fn test_missing_file_is_bad_request() {
    let fixture = TestFixture::new().await;
    let response = fixture
        .post_multipart("/evaluate", &[Part::text("query", QUERY)])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "Missing form field: file"}));
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let fixture = TestFixture::with_config(TestConfig {
        max_upload_bytes: 1024,
        ..TestConfig::default()
    })
    .await;

    let response = fixture
        .post_multipart(
            "/evaluate",
            &[
                Part::text("query", QUERY),
                Part::file("file", "policy.pdf", vec![b'x'; 8 * 1024]),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(fixture.llm.request_count().await, 0);
}

#[tokio::test]
async fn test_semantic_entities_are_reported_when_enabled() {
    let fixture = TestFixture::with_config(TestConfig {
        semantic_entities: true,
        ..TestConfig::default()
    })
    .await;
    fixture
        .llm
        .push_reply(fixtures::adjudication_reply("approved", "knee surgery"))
        .await;
    fixture
        .llm
        .push_reply(r#"{"age": 45, "gender": "unknown", "procedure": "knee surgery", "location": "Mumbai", "policy_duration_months": 8}"#)
        .await;

    let response = fixture.post_multipart("/evaluate", &reference_form()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["semantic_query"]["policy_duration_months"], 8);
    assert_eq!(response.body["semantic_query"]["location"], "Mumbai");
    assert_eq!(response.body["parsed_query"]["location"], "mumbai");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_http_and_core_metrics() {
    let fixture = TestFixture::new().await;
    fixture
        .llm
        .push_reply(fixtures::adjudication_reply("approved", "knee surgery"))
        .await;
    fixture.post_multipart("/evaluate", &reference_form()).await;

    let response = fixture.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("claimwise_http_requests_total"));
    assert!(response.text.contains("path=\"/evaluate\""));
    assert!(response.text.contains("claimwise_evaluations_total"));
}
