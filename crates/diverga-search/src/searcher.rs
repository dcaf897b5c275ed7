//! Weighted fuzzy ranking over the flattened catalog.
//!
//! Scoring works per field, then per document:
//! - field distance = `1 - min(1, score / ideal)`, where `score` is the
//!   nucleo score of the query against the field and `ideal` the score of
//!   the query against itself
//! - fields with a distance above the threshold do not count
//! - document score = product of `distance ^ (weight * norm)` over the
//!   counted fields (a zero distance is replaced by `f64::EPSILON`)
//!
//! Documents with no counted field are dropped. Results are ordered by
//! ascending score, ties broken by catalog order.

use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use tracing::{debug, info};

use diverga_catalog::Catalog;
use diverga_types::{DocType, Locale, Localized, SearchResult, SearchSettings};

use crate::document::{flatten, FlatDocument};
use crate::error::SearchError;
use crate::fields::{Field, FieldWeights};
use crate::formatter::format_results;

/// Searcher tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Highest field distance still counted as a match
    pub threshold: f64,
    /// Limit used when none is requested
    pub default_limit: usize,
    /// Cap applied to requested limits
    pub max_limit: usize,
    /// Minimum trimmed query length in characters
    pub min_query_len: usize,
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            threshold: settings.threshold,
            default_limit: settings.default_limit,
            max_limit: settings.max_limit,
            min_query_len: settings.min_query_len,
            weights: FieldWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidThreshold(self.threshold));
        }
        if self.max_limit < self.default_limit {
            return Err(SearchError::InvalidLimits(format!(
                "max_limit ({}) is below default_limit ({})",
                self.max_limit, self.default_limit
            )));
        }
        self.weights.validate()
    }
}

/// Per-request search options.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Filter by document type (None = all types)
    pub doc_type: Option<DocType>,
    /// Maximum results to return (None = configured default)
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    pub fn agents_only() -> Self {
        Self::new().with_doc_type(DocType::Agent)
    }
}

/// Distance of the query to one field of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub field: Field,
    pub distance: f64,
}

/// A ranked document before locale resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub doc_index: usize,
    pub score: f64,
    pub fields: Vec<FieldMatch>,
}

impl ScoredMatch {
    pub fn new(doc_index: usize, score: f64) -> Self {
        Self {
            doc_index,
            score,
            fields: Vec::new(),
        }
    }
}

/// Fuzzy searcher over an immutable catalog.
///
/// The per-locale flattened views are built once in [`FuzzySearcher::new`];
/// each search call allocates its own matcher, so a searcher can be shared
/// across request handlers without locking.
pub struct FuzzySearcher {
    catalog: Arc<Catalog>,
    views: Localized<Vec<FlatDocument>>,
    weights: [f64; 4],
    config: SearchConfig,
}

impl FuzzySearcher {
    /// Create a searcher, validating the configuration.
    pub fn new(catalog: Arc<Catalog>, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let views = flatten(catalog.documents());
        let weights = config.weights.normalized();

        debug!(
            documents = catalog.len(),
            threshold = config.threshold,
            "Created fuzzy searcher"
        );

        Ok(Self {
            catalog,
            views,
            weights,
            config,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Requested limit capped at `max_limit`, or the default when absent.
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit)
    }

    /// Search all document types.
    pub fn search(&self, query: &str, locale: Locale, limit: Option<usize>) -> Vec<SearchResult> {
        self.search_with(
            query,
            locale,
            SearchOptions {
                limit,
                ..Default::default()
            },
        )
    }

    /// Search and resolve results for `locale`.
    pub fn search_with(
        &self,
        query: &str,
        locale: Locale,
        options: SearchOptions,
    ) -> Vec<SearchResult> {
        let matches = self.rank(query, locale, &options);
        let results = format_results(&self.catalog, &matches, locale);

        info!(
            query = query,
            locale = %locale,
            results = results.len(),
            "Fuzzy search complete"
        );

        results
    }

    /// Rank documents without resolving them.
    pub fn rank(&self, query: &str, locale: Locale, options: &SearchOptions) -> Vec<ScoredMatch> {
        let query = query.trim();
        let limit = self.resolve_limit(options.limit);

        if limit == 0 || query.chars().count() < self.config.min_query_len {
            debug!(query = query, limit = limit, "Query too short or zero limit");
            return Vec::new();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        // Best achievable score: the query matched against itself
        let ideal = match pattern.score(Utf32Str::new(query, &mut buf), &mut matcher) {
            Some(score) if score > 0 => f64::from(score),
            _ => return Vec::new(),
        };

        let documents = self.catalog.documents();
        let mut matches: Vec<ScoredMatch> = self
            .views
            .get(locale)
            .iter()
            .filter(|flat| {
                options
                    .doc_type
                    .map_or(true, |t| documents[flat.doc_index].doc_type == t)
            })
            .filter_map(|flat| self.score_document(flat, &pattern, ideal, &mut matcher, &mut buf))
            .collect();

        matches.sort_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then(a.doc_index.cmp(&b.doc_index))
        });
        matches.truncate(limit);
        matches
    }

    fn score_document(
        &self,
        flat: &FlatDocument,
        pattern: &Pattern,
        ideal: f64,
        matcher: &mut Matcher,
        buf: &mut Vec<char>,
    ) -> Option<ScoredMatch> {
        let mut score = 1.0_f64;
        let mut fields = Vec::new();

        for field in Field::ALL {
            let weight = self.weights[field.index()];
            if weight == 0.0 {
                continue;
            }

            let flat_field = flat.field(field);
            let Some(raw) = pattern.score(Utf32Str::new(&flat_field.text, buf), matcher) else {
                continue;
            };

            let distance = 1.0 - (f64::from(raw) / ideal).min(1.0);
            if distance > self.config.threshold {
                continue;
            }

            let base = if distance == 0.0 {
                f64::EPSILON
            } else {
                distance
            };
            score *= base.powf(weight * flat_field.norm);
            fields.push(FieldMatch { field, distance });
        }

        if fields.is_empty() {
            None
        } else {
            Some(ScoredMatch {
                doc_index: flat.doc_index,
                score,
                fields,
            })
        }
    }
}
