//! Shared handler state.

use std::sync::Arc;

use diverga_assistant::Assistant;
use diverga_search::FuzzySearcher;

/// State cloned into every request handler.
///
/// Both members are immutable after startup, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<FuzzySearcher>,
    pub assistant: Arc<dyn Assistant>,
}

impl AppState {
    pub fn new(searcher: Arc<FuzzySearcher>, assistant: Arc<dyn Assistant>) -> Self {
        Self {
            searcher,
            assistant,
        }
    }
}
