//! Projection of internal matches into the public result shape.

use diverga_catalog::Catalog;
use diverga_types::{Locale, SearchResult};

use crate::searcher::ScoredMatch;

/// Resolve matches against the catalog for one locale.
///
/// Only the combined score survives from the match metadata. Hrefs gain
/// the locale prefix (`/agents/x` becomes `/ko/agents/x`).
pub fn format_results(
    catalog: &Catalog,
    matches: &[ScoredMatch],
    locale: Locale,
) -> Vec<SearchResult> {
    matches
        .iter()
        .filter_map(|m| {
            let doc = catalog.documents().get(m.doc_index)?;
            Some(SearchResult {
                doc_type: doc.doc_type,
                id: doc.id.clone(),
                title: doc.title.get(locale).clone(),
                description: doc.description.get(locale).clone(),
                href: format!("/{}{}", locale, doc.href),
                category: doc.category.clone(),
                score: m.score,
            })
        })
        .collect()
}
