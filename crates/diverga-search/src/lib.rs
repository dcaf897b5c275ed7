//! # diverga-search
//!
//! Fuzzy search over the Diverga document catalog.
//!
//! Each document is flattened per locale into four weighted fields
//! (title, id, keywords, description). A query is matched against every
//! field with `nucleo-matcher`; per-field distances are combined into a
//! single smaller-is-better score in [0, 1].
//!
//! ## Features
//! - Field weights: title x3, id x2, keywords x2, description x1
//! - Distance threshold per field (default 0.4)
//! - Short fields outrank long ones on equal distance (field-length norm)
//! - Optional document type filter
//! - Locale-resolved result projection

pub mod document;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod searcher;

pub use document::{flatten, FlatDocument, FlatField};
pub use error::SearchError;
pub use fields::{Field, FieldWeights};
pub use formatter::format_results;
pub use searcher::{FuzzySearcher, SearchConfig, SearchOptions};
