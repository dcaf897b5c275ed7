//! API-backed assistant using OpenAI-compatible chat-completion endpoints.

use async_trait::async_trait;
use backoff::{backoff::Backoff, ExponentialBackoff};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

use diverga_types::AssistantSettings;

use super::{Assistant, AssistantError, AssistantReply, AssistantRequest};
use crate::prompt::{build_system_prompt, parse_t_score};

/// Configuration for the API-backed assistant.
#[derive(Debug, Clone)]
pub struct ApiAssistantConfig {
    /// API base URL (e.g., "https://api.openai.com/v1")
    pub base_url: String,

    /// Model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// Bearer token
    pub api_key: SecretString,

    /// Request timeout
    pub timeout: Duration,

    /// Attempts per request; 1 means no retry
    pub max_attempts: u32,
}

impl ApiAssistantConfig {
    /// Create config for the OpenAI API.
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
            api_key: SecretString::from(api_key.into()),
            timeout: Duration::from_secs(60),
            max_attempts: 1,
        }
    }

    /// Create config from loaded settings and a resolved key.
    pub fn from_settings(settings: &AssistantSettings, api_key: impl Into<String>) -> Self {
        Self {
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: SecretString::from(api_key.into()),
            timeout: Duration::from_secs(settings.timeout_secs),
            max_attempts: settings.max_attempts.max(1),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

/// Assistant that forwards each request to the chat-completion API.
pub struct ApiAssistant {
    client: Client,
    config: ApiAssistantConfig,
}

impl ApiAssistant {
    pub fn new(config: ApiAssistantConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Call the API, retrying with backoff while attempts remain.
    async fn call_api(&self, request: &AssistantRequest) -> Result<String, AssistantError> {
        let mut backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(120)),
            ..Default::default()
        };

        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(attempt = attempts, agent_id = %request.agent_id, "Calling chat-completion API");

            match self.make_request(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempts >= self.config.max_attempts {
                        error!(error = %e, attempts, "Chat-completion request failed");
                        return Err(e);
                    }

                    match backoff.next_backoff() {
                        Some(duration) => {
                            warn!(
                                error = %e,
                                retry_in_ms = duration.as_millis(),
                                "API call failed, retrying"
                            );
                            tokio::time::sleep(duration).await;
                        }
                        None => {
                            error!(error = %e, "Backoff exhausted");
                            return Err(e);
                        }
                    }
                }
            }
        }
    }

    /// Make a single chat-completion request.
    async fn make_request(&self, request: &AssistantRequest) -> Result<String, AssistantError> {
        #[derive(Serialize)]
        struct ChatRequest {
            model: String,
            messages: Vec<ChatMessage>,
        }

        #[derive(Serialize)]
        struct ChatMessage {
            role: String,
            content: String,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessageResponse,
        }

        #[derive(Deserialize)]
        struct ChatMessageResponse {
            content: String,
        }

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: build_system_prompt(request),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.input.clone(),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Upstream { status, body });
        }

        let response_body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(e.to_string()))?;

        response_body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AssistantError::Parse("No choices in response".to_string()))
    }
}

#[async_trait]
impl Assistant for ApiAssistant {
    async fn respond(&self, request: &AssistantRequest) -> Result<AssistantReply, AssistantError> {
        if request.input.trim().is_empty() {
            return Err(AssistantError::InvalidInput("input must not be empty".to_string()));
        }

        let response = self.call_api(request).await?;
        let t_score = parse_t_score(&response);

        Ok(AssistantReply {
            response,
            agent_id: request.agent_id.clone(),
            model: self.config.model.clone(),
            t_score,
            demo: false,
        })
    }

    fn is_demo(&self) -> bool {
        false
    }
}
