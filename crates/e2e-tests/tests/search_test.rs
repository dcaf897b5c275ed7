//! Search E2E tests.
//!
//! Drive `/search` and `/api/search` through the real router and catalog.

use pretty_assertions::assert_eq;

use diverga_catalog::shared_catalog;
use e2e_tests::{result_ids, result_scores, TestHarness};

#[tokio::test]
async fn test_meta_analysis_query() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .get_json("/api/search?q=meta-analysis&locale=en&limit=10")
        .await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["query"], "meta-analysis");

    let ids = result_ids(&body);
    assert!(ids.len() <= 10);
    assert_eq!(ids[0], "meta-analysis");
    assert_eq!(body["results"][0]["type"], "workflow");
    assert_eq!(body["results"][0]["href"], "/en/workflows/meta-analysis");
    assert!(ids.contains(&"C5".to_string()), "got {:?}", ids);
    assert!(ids.contains(&"B3".to_string()), "got {:?}", ids);

    let scores = result_scores(&body);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{:?}", scores);
    assert_eq!(body["total"].as_u64().unwrap() as usize, ids.len());
}

#[tokio::test]
async fn test_meta_analysis_includes_every_keyword_holder() {
    let harness = TestHarness::new();
    let (_, body) = harness
        .get_json("/api/search?q=meta-analysis&locale=en&limit=10")
        .await;
    let ids = result_ids(&body);

    let catalog = shared_catalog();
    let holders: Vec<&str> = catalog
        .documents()
        .iter()
        .filter(|d| d.keywords.en.iter().any(|k| k == "meta-analysis"))
        .map(|d| d.id.as_str())
        .collect();
    assert!(holders.len() >= 3, "{:?}", holders);
    for id in holders {
        assert!(ids.iter().any(|found| found == id), "{} missing from {:?}", id, ids);
    }
}

#[tokio::test]
async fn test_short_query_is_empty() {
    let harness = TestHarness::new();
    for uri in ["/search?q=", "/search?q=m", "/search"] {
        let (status, body) = harness.get_json(uri).await;
        assert_eq!(status.as_u16(), 200, "{}", uri);
        assert_eq!(body["total"], 0, "{}", uri);
        assert!(body["results"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_no_match() {
    let harness = TestHarness::new();
    let (_, body) = harness.get_json("/search?q=xyznotfound&locale=ko").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["query"], "xyznotfound");
}

#[tokio::test]
async fn test_exact_title_first() {
    let harness = TestHarness::new();
    let (_, body) = harness
        .get_json("/search?q=Meta-Analysis%20Master&locale=en")
        .await;
    assert_eq!(body["results"][0]["id"], "C5");
    assert!(body["results"][0]["score"].as_f64().unwrap() < 1e-3);
}

#[tokio::test]
async fn test_locale_switch() {
    let harness = TestHarness::new();
    let (_, en) = harness.get_json("/search?q=c5&locale=en").await;
    let (_, ko) = harness.get_json("/search?q=c5&locale=ko").await;

    assert_eq!(en["results"][0]["id"], "C5");
    assert_eq!(ko["results"][0]["id"], "C5");
    assert_eq!(en["results"][0]["title"], "Meta-Analysis Master");
    assert_eq!(ko["results"][0]["title"], "메타분석 마스터");
    assert_eq!(ko["results"][0]["href"], "/ko/agents/meta-analysis-master");
}

#[tokio::test]
async fn test_korean_query() {
    let harness = TestHarness::new();
    let (_, body) = harness
        .get_json("/search?q=%EB%A9%94%ED%83%80%EB%B6%84%EC%84%9D&locale=ko")
        .await;
    assert_eq!(body["query"], "메타분석");
    assert_eq!(body["results"][0]["id"], "meta-analysis");
    assert_eq!(body["results"][0]["title"], "메타분석");
}

#[tokio::test]
async fn test_unknown_locale_falls_back_to_english() {
    let harness = TestHarness::new();
    let (status, body) = harness.get_json("/search?q=c5&locale=fr").await;
    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["results"][0]["title"], "Meta-Analysis Master");
}

#[tokio::test]
async fn test_limit_and_cap() {
    let harness = TestHarness::new();

    let (_, body) = harness.get_json("/search?q=research&limit=3").await;
    assert!(result_ids(&body).len() <= 3);

    let (_, body) = harness.get_json("/search?q=a%20e&limit=5000").await;
    assert!(result_ids(&body).len() <= 50);
}

#[tokio::test]
async fn test_type_filter() {
    let harness = TestHarness::new();
    let (_, body) = harness
        .get_json("/search?q=meta-analysis&type=workflow")
        .await;
    let results = body["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r["type"] == "workflow"));
}

#[tokio::test]
async fn test_router_matches_searcher() {
    let harness = TestHarness::new();
    let direct = harness
        .searcher
        .search("systematic review", diverga_types::Locale::En, None);
    let (_, body) = harness.get_json("/search?q=systematic%20review").await;

    let direct_ids: Vec<String> = direct.into_iter().map(|r| r.id).collect();
    assert_eq!(result_ids(&body), direct_ids);
}
