//! End-to-end test infrastructure for Diverga.
//!
//! Provides a shared TestHarness that wires the real catalog, searcher and
//! router together, plus helpers for driving the router in-process.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use diverga_assistant::{Assistant, DemoAssistant};
use diverga_catalog::shared_catalog;
use diverga_search::{FuzzySearcher, SearchConfig};
use diverga_service::{build_router, AppState};
use diverga_types::{AssistantSettings, SearchSettings};

/// Shared test harness for E2E tests.
pub struct TestHarness {
    pub searcher: Arc<FuzzySearcher>,
    pub router: Router,
}

impl TestHarness {
    /// Harness serving demo assistant responses.
    pub fn new() -> Self {
        Self::with_assistant(Arc::new(DemoAssistant::new()))
    }

    /// Harness whose assistant talks to `base_url` with a test key.
    pub fn live(base_url: &str) -> Self {
        let settings = AssistantSettings {
            api_key: Some("test-key".to_string()),
            api_base_url: base_url.to_string(),
            ..Default::default()
        };
        let assistant =
            diverga_assistant::from_settings(&settings).expect("Failed to build assistant");
        Self::with_assistant(assistant)
    }

    pub fn with_assistant(assistant: Arc<dyn Assistant>) -> Self {
        let config = SearchConfig::from(&SearchSettings::default());
        let searcher = Arc::new(
            FuzzySearcher::new(shared_catalog(), config).expect("Failed to build searcher"),
        );
        let router = build_router(AppState::new(searcher.clone(), assistant), &[]);
        Self { searcher, router }
    }

    /// Issue a GET and decode the JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Issue a POST with a JSON body and decode the JSON response.
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Issue a POST with an arbitrary body and content type.
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).expect("Response was not JSON");
        (status, body)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids of the results in a search response body.
pub fn result_ids(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .map(|results| {
            results
                .iter()
                .filter_map(|r| r["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Scores of the results in a search response body.
pub fn result_scores(body: &Value) -> Vec<f64> {
    body["results"]
        .as_array()
        .map(|results| results.iter().filter_map(|r| r["score"].as_f64()).collect())
        .unwrap_or_default()
}
