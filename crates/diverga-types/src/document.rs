//! Searchable documents and the public search result shape.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, Localized};

/// Kinds of entity held in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Agent,
    Doc,
    Workflow,
}

impl DocType {
    pub const ALL: [DocType; 3] = [DocType::Agent, DocType::Doc, DocType::Workflow];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Agent => "agent",
            DocType::Doc => "doc",
            DocType::Workflow => "workflow",
        }
    }

    /// Parse from string, returning None for unknown types.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agent" => Some(DocType::Agent),
            "doc" => Some(DocType::Doc),
            "workflow" => Some(DocType::Workflow),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown doc type: {}", s))
    }
}

/// One entry of the searchable catalog.
///
/// Built once at startup from the static agent, doc and workflow sources
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableDocument {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub id: String,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub keywords: Localized<Vec<String>>,
    pub category: String,
    pub href: String,
}

impl SearchableDocument {
    /// Returns the locales whose title or description is blank.
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|&locale| {
                self.title.get(locale).trim().is_empty()
                    || self.description.get(locale).trim().is_empty()
            })
            .collect()
    }
}

/// A ranked, locale-resolved search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub id: String,
    pub title: String,
    pub description: String,
    pub href: String,
    pub category: String,
    /// Distance in [0, 1]; smaller is a better match.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> SearchableDocument {
        SearchableDocument {
            doc_type: DocType::Workflow,
            id: "meta-analysis".to_string(),
            title: Localized::text("Meta-Analysis", "메타분석"),
            description: Localized::text("Pool effect sizes", "효과크기 통합"),
            keywords: Localized::words(&["meta-analysis"], &["메타분석"]),
            category: "workflow".to_string(),
            href: "/workflows/meta-analysis".to_string(),
        }
    }

    #[test]
    fn test_doc_type_roundtrip() {
        for doc_type in DocType::ALL {
            assert_eq!(doc_type.as_str().parse::<DocType>().unwrap(), doc_type);
        }
        assert!("page".parse::<DocType>().is_err());
    }

    #[test]
    fn test_doc_type_parse_is_case_insensitive() {
        assert_eq!(DocType::parse(" Agent "), Some(DocType::Agent));
    }

    #[test]
    fn test_missing_locales_complete_document() {
        assert!(sample_document().missing_locales().is_empty());
    }

    #[test]
    fn test_missing_locales_blank_korean_title() {
        let mut doc = sample_document();
        doc.title.ko = "  ".to_string();
        assert_eq!(doc.missing_locales(), vec![Locale::Ko]);
    }

    #[test]
    fn test_search_result_serializes_type_field() {
        let result = SearchResult {
            doc_type: DocType::Agent,
            id: "C5".to_string(),
            title: "Meta-Analysis Master".to_string(),
            description: "Pools effect sizes".to_string(),
            href: "/agents/meta-analysis-master".to_string(),
            category: "design".to_string(),
            score: 0.01,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "agent");
        assert_eq!(json["id"], "C5");
        assert!(json.get("doc_type").is_none());
    }
}
