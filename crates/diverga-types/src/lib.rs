//! # diverga-types
//!
//! Shared domain types for the Diverga search service.
//!
//! This crate defines the data structures used throughout the workspace:
//! - Locales and localized values
//! - Searchable documents and the public search result shape
//! - Settings: layered configuration
//!
//! ## Usage
//!
//! ```rust
//! use diverga_types::{Locale, DocType};
//!
//! assert_eq!(Locale::parse_lenient("ko-KR"), Locale::Ko);
//! assert_eq!(DocType::parse("workflow"), Some(DocType::Workflow));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod locale;

pub use config::{AssistantSettings, SearchSettings, Settings};
pub use document::{DocType, SearchResult, SearchableDocument};
pub use error::DivergaError;
pub use locale::{Locale, Localized};
