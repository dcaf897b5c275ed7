//! Search endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use diverga_search::SearchOptions;
use diverga_types::{DocType, Locale, SearchResult};

use crate::state::AppState;

/// Raw query string parameters.
///
/// Everything is taken as text so that malformed values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub locale: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
}

impl SearchParams {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            doc_type: self.doc_type.as_deref().and_then(DocType::parse),
            limit: self
                .limit
                .as_deref()
                .and_then(|l| l.trim().parse::<usize>().ok()),
        }
    }

    fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::parse_lenient)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub query: String,
    pub total: usize,
}

/// `GET /search?q=&locale=&limit=&type=`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.clone().unwrap_or_default();
    let results = state
        .searcher
        .search_with(&query, params.locale(), params.options());
    let total = results.len();

    Json(SearchResponse {
        results,
        query,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(q: &str, locale: &str, limit: &str, doc_type: &str) -> SearchParams {
        SearchParams {
            q: Some(q.to_string()),
            locale: Some(locale.to_string()),
            limit: Some(limit.to_string()),
            doc_type: Some(doc_type.to_string()),
        }
    }

    #[test]
    fn test_params_parse() {
        let p = params("meta", "ko", "5", "agent");
        assert_eq!(p.locale(), Locale::Ko);
        let options = p.options();
        assert_eq!(options.limit, Some(5));
        assert_eq!(options.doc_type, Some(DocType::Agent));
    }

    #[test]
    fn test_malformed_params_fall_back() {
        let p = params("meta", "xx", "ten", "page");
        assert_eq!(p.locale(), Locale::En);
        let options = p.options();
        assert_eq!(options.limit, None);
        assert_eq!(options.doc_type, None);
    }

    #[test]
    fn test_missing_params() {
        let p = SearchParams::default();
        assert_eq!(p.locale(), Locale::En);
        assert_eq!(p.options().limit, None);
    }
}
