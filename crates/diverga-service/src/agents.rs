//! Agent listing endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use diverga_catalog::{agents_in, Agent, AgentCategory, AGENTS};
use diverga_types::Locale;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AgentParams {
    pub locale: Option<String>,
    pub category: Option<String>,
}

/// An agent resolved for one locale.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub category_name: String,
    pub href: String,
}

impl AgentSummary {
    pub fn resolve(agent: &Agent, locale: Locale) -> Self {
        Self {
            id: agent.id.to_string(),
            slug: agent.slug.to_string(),
            name: agent.name.get(locale).to_string(),
            description: agent.description.get(locale).to_string(),
            category: agent.category.slug().to_string(),
            category_name: agent.category.name().get(locale).to_string(),
            href: format!("/{}{}", locale, agent.href()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgentListResponse {
    pub agents: Vec<AgentSummary>,
    pub total: usize,
}

/// `GET /api/agents?locale=&category=`
///
/// An unknown category is rejected; an unknown locale falls back to English.
pub async fn list_agents(
    State(_state): State<AppState>,
    Query(params): Query<AgentParams>,
) -> Result<Json<AgentListResponse>, ApiError> {
    let locale = params
        .locale
        .as_deref()
        .map(Locale::parse_lenient)
        .unwrap_or_default();

    let category = match params.category.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(raw) => Some(
            AgentCategory::parse(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown category: {}", raw)))?,
        ),
        None => None,
    };

    let agents: Vec<AgentSummary> = match category {
        Some(c) => agents_in(c).map(|a| AgentSummary::resolve(a, locale)).collect(),
        None => AGENTS
            .iter()
            .map(|a| AgentSummary::resolve(a, locale))
            .collect(),
    };
    let total = agents.len();

    Ok(Json(AgentListResponse { agents, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use diverga_catalog::agent_by_id;

    #[test]
    fn test_resolve_korean() {
        let summary = AgentSummary::resolve(agent_by_id("A3").unwrap(), Locale::Ko);
        assert_eq!(summary.name, "악마의 대변인");
        assert_eq!(summary.category, "foundation");
        assert_eq!(summary.category_name, "연구 기초");
        assert_eq!(summary.href, "/ko/agents/devils-advocate");
    }
}
