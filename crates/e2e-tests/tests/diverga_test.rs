//! Assistant endpoint E2E tests.
//!
//! Demo mode runs against the canned scripts; live mode talks to a
//! wiremock server standing in for the chat-completion API.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use diverga_assistant::demo_response;
use e2e_tests::TestHarness;

#[tokio::test]
async fn test_demo_a1() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .post_json("/api/diverga", &json!({"command": "refine", "agentId": "a1"}))
        .await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["demo"], true);
    assert_eq!(body["agentId"], "a1");
    assert_eq!(body["response"], demo_response("A1").unwrap().0);
    assert_eq!(body["tScore"], 0.45);
}

#[tokio::test]
async fn test_demo_unknown_agent() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .post_json("/api/diverga", &json!({"agentId": "Z9", "input": "hello"}))
        .await;
    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["demo"], true);
    assert!(!body["response"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_mode() {
    let demo = TestHarness::new();
    let (_, body) = demo.get_json("/health").await;
    assert_eq!(body["assistant"], "demo");

    let server = MockServer::start().await;
    let live = TestHarness::live(&server.uri());
    let (_, body) = live.get_json("/health").await;
    assert_eq!(body["assistant"], "live");
}

#[tokio::test]
async fn test_live_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Consider narrowing the population.\nT-Score: 0.62"
                },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = TestHarness::live(&server.uri());
    let (status, body) = harness
        .post_json(
            "/api/diverga",
            &json!({"command": "refine", "input": "Does AI tutoring help?", "agentId": "A1"}),
        )
        .await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["demo"], false);
    assert_eq!(body["tScore"], 0.62);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Consider narrowing"));
}

#[tokio::test]
async fn test_live_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let harness = TestHarness::live(&server.uri());
    let (status, body) = harness
        .post_json(
            "/api/diverga",
            &json!({"command": "refine", "input": "hi", "agentId": "A1"}),
        )
        .await;

    assert_eq!(status.as_u16(), 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["details"], "invalid api key");
    assert!(body["error"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn test_live_empty_input_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let harness = TestHarness::live(&server.uri());
    let (status, body) = harness
        .post_json("/api/diverga", &json!({"command": "refine", "agentId": "A1"}))
        .await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_malformed_bodies_use_json_error_shape() {
    let harness = TestHarness::new();
    let cases = [
        ("application/json", "{not json"),
        ("text/plain", "{}"),
        ("application/json", r#"{"agentId": 5}"#),
    ];

    for (content_type, body) in cases {
        let (status, response) = harness
            .post_raw("/api/diverga", content_type, body)
            .await;
        assert_eq!(status.as_u16(), 400, "{} {}", content_type, body);
        assert_eq!(response["success"], false, "{} {}", content_type, body);
        assert!(
            !response["error"].as_str().unwrap().is_empty(),
            "{} {}",
            content_type,
            body
        );
    }
}
