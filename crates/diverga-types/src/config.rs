//! Configuration loading for the Diverga service.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/diverga/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DivergaError;

/// Environment variable consulted when no assistant key is configured.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Fuzzy search tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Highest per-field distance still counted as a match.
    /// Range: 0.0-1.0, higher = looser matches admitted.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Result count used when a request gives no usable limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound applied to any requested limit.
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Queries shorter than this (in characters, after trimming) return nothing.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_threshold() -> f64 {
    0.4
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    50
}

fn default_min_query_len() -> usize {
    2
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_query_len: default_min_query_len(),
        }
    }
}

impl SearchSettings {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!("threshold must be 0.0-1.0, got {}", self.threshold));
        }
        if self.default_limit == 0 {
            return Err("default_limit must be > 0".to_string());
        }
        if self.max_limit < self.default_limit {
            return Err(format!(
                "max_limit ({}) must be >= default_limit ({})",
                self.max_limit, self.default_limit
            ));
        }
        if self.min_query_len == 0 {
            return Err("min_query_len must be > 0".to_string());
        }
        Ok(())
    }
}

/// Chat-completion provider settings for the demo assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Model name (e.g., "gpt-4o-mini")
    #[serde(default = "default_assistant_model")]
    pub model: String,

    /// API key (loaded from env var, not stored in config file)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per request; 1 disables retries
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_assistant_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_attempts() -> u32 {
    1
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: default_assistant_model(),
            api_key: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl AssistantSettings {
    /// The configured API key, or `OPENAI_API_KEY` when none is set.
    ///
    /// Blank values count as unset.
    pub fn effective_api_key(&self) -> Option<String> {
        let non_blank = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(non_blank)
            .or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok().filter(non_blank))
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server host
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Search configuration
    #[serde(default)]
    pub search: SearchSettings,

    /// Demo assistant configuration
    #[serde(default)]
    pub assistant: AssistantSettings,
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_host: default_http_host(),
            http_port: default_http_port(),
            log_level: default_log_level(),
            cors_origins: Vec::new(),
            search: SearchSettings::default(),
            assistant: AssistantSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/diverga/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (DIVERGA_*, `__` between nested keys)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, DivergaError> {
        let config_dir = ProjectDirs::from("", "", "diverga")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            // 1. Built-in defaults
            .set_default("http_host", default_http_host())
            .map_err(|e| DivergaError::Config(e.to_string()))?
            .set_default("http_port", default_http_port() as i64)
            .map_err(|e| DivergaError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| DivergaError::Config(e.to_string()))?
            .set_default("search.threshold", default_threshold())
            .map_err(|e| DivergaError::Config(e.to_string()))?
            .set_default("assistant.model", default_assistant_model())
            .map_err(|e| DivergaError::Config(e.to_string()))?
            .set_default("assistant.api_base_url", default_api_base_url())
            .map_err(|e| DivergaError::Config(e.to_string()))?
            // 2. Default config file
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        // 3. CLI-specified config file (higher precedence than default)
        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // 4. Environment variables (highest precedence before CLI flags)
        // Format: DIVERGA_HTTP_PORT, DIVERGA_SEARCH__THRESHOLD, DIVERGA_ASSISTANT__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("DIVERGA")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors_origins")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| DivergaError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| DivergaError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the loaded settings.
    pub fn validate(&self) -> Result<(), DivergaError> {
        self.search
            .validate()
            .map_err(|e| DivergaError::Config(format!("search: {}", e)))?;
        if self.assistant.max_attempts == 0 {
            return Err(DivergaError::Config(
                "assistant: max_attempts must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the socket address for the HTTP server
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
