//! Research assistant trait and implementations.
//!
//! Two implementations sit behind the [`Assistant`] trait:
//! - [`ApiAssistant`]: forwards the prompt to an OpenAI-compatible
//!   chat-completion endpoint
//! - [`DemoAssistant`]: returns canned text, used when no API key is set
//!
//! [`from_settings`] picks one based on whether a key is configured.

mod api;
mod demo;
mod prompt;

pub use api::{ApiAssistant, ApiAssistantConfig};
pub use demo::{demo_response, DemoAssistant, DEMO_MODEL};
pub use prompt::{build_system_prompt, parse_t_score};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use diverga_types::AssistantSettings;

/// Error type for assistant operations.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Upstream API answered with a non-success status
    #[error("Upstream API error: HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("API request failed: {0}")]
    Request(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AssistantError {
    /// Upstream response body, when the failure came from the provider.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            AssistantError::Upstream { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// A prompt addressed to one research agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    /// Agent command, e.g. "refine" or "critique"
    #[serde(default)]
    pub command: String,
    /// User text the agent should work on
    #[serde(default)]
    pub input: String,
    /// Target agent id (e.g. "A1"), case-insensitive
    #[serde(default)]
    pub agent_id: String,
}

impl AssistantRequest {
    pub fn new(
        command: impl Into<String>,
        input: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            input: input.into(),
            agent_id: agent_id.into(),
        }
    }
}

/// The agent's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub response: String,
    pub agent_id: String,
    pub model: String,
    /// Typicality of the main recommendation, when reported
    pub t_score: Option<f64>,
    /// True when the reply is canned demo text
    pub demo: bool,
}

/// Pluggable assistant trait.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer one request.
    async fn respond(&self, request: &AssistantRequest) -> Result<AssistantReply, AssistantError>;

    /// Whether replies are canned rather than generated.
    fn is_demo(&self) -> bool;
}

/// Build the assistant for the given settings.
///
/// Uses the API when a key is available (see
/// [`AssistantSettings::effective_api_key`]), otherwise the demo assistant.
pub fn from_settings(settings: &AssistantSettings) -> Result<Arc<dyn Assistant>, AssistantError> {
    match settings.effective_api_key() {
        Some(key) => {
            info!(model = %settings.model, base_url = %settings.api_base_url, "Using API assistant");
            let config = ApiAssistantConfig::from_settings(settings, key);
            Ok(Arc::new(ApiAssistant::new(config)?))
        }
        None => {
            info!("No assistant API key configured, serving demo responses");
            Ok(Arc::new(DemoAssistant::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let request: AssistantRequest = serde_json::from_str(
            r#"{"command": "refine", "input": "AI tutors", "agentId": "a1"}"#,
        )
        .unwrap();
        assert_eq!(request.agent_id, "a1");
        assert_eq!(request.command, "refine");
    }

    #[test]
    fn test_request_fields_default() {
        let request: AssistantRequest = serde_json::from_str("{}").unwrap();
        assert!(request.agent_id.is_empty());
        assert!(request.input.is_empty());
    }

    #[test]
    fn test_reply_serialization() {
        let reply = AssistantReply {
            response: "ok".to_string(),
            agent_id: "A1".to_string(),
            model: "demo".to_string(),
            t_score: Some(0.4),
            demo: true,
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["agentId"], "A1");
        assert_eq!(json["tScore"], 0.4);
        assert_eq!(json["demo"], true);
    }

    #[test]
    fn test_upstream_body() {
        let err = AssistantError::Upstream {
            status: 401,
            body: "bad key".to_string(),
        };
        assert_eq!(err.upstream_body(), Some("bad key"));
        assert!(err.to_string().contains("401"));
        assert!(AssistantError::Parse("x".to_string()).upstream_body().is_none());
    }

    #[test]
    fn test_from_settings_with_key_is_live() {
        let settings = AssistantSettings {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let assistant = from_settings(&settings).unwrap();
        assert!(!assistant.is_demo());
    }
}
