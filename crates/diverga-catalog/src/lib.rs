//! # diverga-catalog
//!
//! The static universe of searchable entities.
//!
//! Three hardcoded sources are flattened into one read-only list of
//! [`SearchableDocument`](diverga_types::SearchableDocument):
//! - the research agent registry ([`agents`])
//! - documentation page metadata ([`docs`])
//! - workflow metadata ([`workflows`])
//!
//! The flattened [`Catalog`] is built once per process by
//! [`shared_catalog`] and shared as an `Arc` afterwards.

pub mod agents;
pub mod catalog;
pub mod docs;
pub mod text;
pub mod workflows;

pub use agents::{agent_by_id, agents_in, Agent, AgentCategory, AGENTS};
pub use catalog::{shared_catalog, Catalog};
pub use docs::{DocPage, DOC_PAGES};
pub use text::{Keywords, Text};
pub use workflows::{Workflow, WORKFLOWS};
