//! Flattened, read-only document catalog.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use diverga_types::{DivergaError, DocType, SearchableDocument};

use crate::agents::{Agent, AGENTS};
use crate::docs::{DocPage, DOC_PAGES};
use crate::workflows::{Workflow, WORKFLOWS};

static SHARED: OnceLock<Arc<Catalog>> = OnceLock::new();

/// The process-wide catalog, built on first use.
pub fn shared_catalog() -> Arc<Catalog> {
    SHARED.get_or_init(|| Arc::new(Catalog::build())).clone()
}

/// Immutable list of every searchable document.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<SearchableDocument>,
}

impl Catalog {
    /// Flatten the agent registry, doc pages and workflows, in that order.
    pub fn build() -> Self {
        let documents: Vec<SearchableDocument> = AGENTS
            .iter()
            .map(agent_document)
            .chain(DOC_PAGES.iter().map(doc_document))
            .chain(WORKFLOWS.iter().map(workflow_document))
            .collect();

        debug!(
            agents = AGENTS.len(),
            docs = DOC_PAGES.len(),
            workflows = WORKFLOWS.len(),
            "Built document catalog"
        );

        Self { documents }
    }

    /// Wrap an explicit document list.
    pub fn from_documents(documents: Vec<SearchableDocument>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[SearchableDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Find a document by type and id.
    pub fn get(&self, doc_type: DocType, id: &str) -> Option<&SearchableDocument> {
        self.documents
            .iter()
            .find(|d| d.doc_type == doc_type && d.id == id)
    }

    pub fn by_type(&self, doc_type: DocType) -> impl Iterator<Item = &SearchableDocument> {
        self.documents.iter().filter(move |d| d.doc_type == doc_type)
    }

    /// Check that ids are unique per type and every locale has a title and description.
    pub fn validate(&self) -> Result<(), DivergaError> {
        let mut seen = HashSet::new();
        for doc in &self.documents {
            if !seen.insert((doc.doc_type, doc.id.as_str())) {
                return Err(DivergaError::InvalidInput(format!(
                    "duplicate {} id: {}",
                    doc.doc_type, doc.id
                )));
            }
            let missing = doc.missing_locales();
            if !missing.is_empty() {
                return Err(DivergaError::InvalidInput(format!(
                    "{} {} lacks title or description for {:?}",
                    doc.doc_type, doc.id, missing
                )));
            }
        }
        Ok(())
    }
}

fn agent_document(agent: &Agent) -> SearchableDocument {
    SearchableDocument {
        doc_type: DocType::Agent,
        id: agent.id.to_string(),
        title: agent.name.localized(),
        description: agent.description.localized(),
        keywords: agent.keywords.localized(),
        category: agent.category.slug().to_string(),
        href: agent.href(),
    }
}

fn doc_document(page: &DocPage) -> SearchableDocument {
    SearchableDocument {
        doc_type: DocType::Doc,
        id: page.slug.to_string(),
        title: page.title.localized(),
        description: page.description.localized(),
        keywords: page.keywords.localized(),
        category: page.section.to_string(),
        href: page.href(),
    }
}

fn workflow_document(workflow: &Workflow) -> SearchableDocument {
    SearchableDocument {
        doc_type: DocType::Workflow,
        id: workflow.id.to_string(),
        title: workflow.title.localized(),
        description: workflow.description.localized(),
        keywords: workflow.keywords.localized(),
        category: "workflow".to_string(),
        href: workflow.href(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::agent_by_id;
    use diverga_types::Localized;

    #[test]
    fn test_build_flattens_all_sources() {
        let catalog = Catalog::build();
        assert_eq!(
            catalog.len(),
            AGENTS.len() + DOC_PAGES.len() + WORKFLOWS.len()
        );
        assert_eq!(catalog.by_type(DocType::Agent).count(), AGENTS.len());
        assert_eq!(catalog.by_type(DocType::Doc).count(), DOC_PAGES.len());
        assert_eq!(catalog.by_type(DocType::Workflow).count(), WORKFLOWS.len());
    }

    #[test]
    fn test_static_catalog_is_valid() {
        Catalog::build().validate().unwrap();
    }

    #[test]
    fn test_agent_document_fields() {
        let catalog = Catalog::build();
        let doc = catalog.get(DocType::Agent, "C5").unwrap();
        assert_eq!(doc.title.en, "Meta-Analysis Master");
        assert_eq!(doc.title.ko, "메타분석 마스터");
        assert_eq!(doc.category, "design");
        assert_eq!(doc.href, "/agents/meta-analysis-master");
        assert!(doc.keywords.en.iter().any(|k| k == "meta-analysis"));
    }

    #[test]
    fn test_workflow_document_fields() {
        let catalog = Catalog::build();
        let doc = catalog.get(DocType::Workflow, "meta-analysis").unwrap();
        assert_eq!(doc.category, "workflow");
        assert_eq!(doc.href, "/workflows/meta-analysis");
    }

    #[test]
    fn test_workflow_agents_exist() {
        for workflow in WORKFLOWS {
            for id in workflow.agents {
                assert!(agent_by_id(id).is_some(), "{} references {}", workflow.id, id);
            }
        }
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let doc = Catalog::build().documents()[0].clone();
        let catalog = Catalog::from_documents(vec![doc.clone(), doc]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_translation() {
        let mut doc = Catalog::build().documents()[0].clone();
        doc.description = Localized::text("Has English", "");
        let catalog = Catalog::from_documents(vec![doc]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Ko"));
    }

    #[test]
    fn test_shared_catalog_is_built_once() {
        let a = shared_catalog();
        let b = shared_catalog();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
