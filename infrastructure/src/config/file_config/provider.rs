//! Provider configuration from TOML (`[provider]` section)

use crate::config::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Raw completion service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the OpenAI-compatible API (default: OpenRouter).
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key. Prefer the env var.
    pub api_key: Option<String>,
    /// Environment variable holding the model identifier.
    pub model_env: String,
    /// Literal model identifier; wins over `model_env`.
    pub model: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// `HTTP-Referer` attribution header.
    pub referer: Option<String>,
    /// `X-Title` attribution header.
    pub title: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "DEEPSEEK_API_KEY".to_string(),
            api_key: None,
            model_env: "DEEPSEEK_MODEL".to_string(),
            model: None,
            timeout_seconds: 30,
            referer: Some("http://localhost:8501".to_string()),
            title: None,
        }
    }
}

/// Resolved settings for the completion service adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub referer: Option<String>,
    pub title: Option<String>,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

impl FileProviderConfig {
    /// Resolve credential and model, reading variables through `lookup`.
    ///
    /// Blank values count as missing.
    pub fn resolve<F>(&self, lookup: F) -> Result<ProviderSettings, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_blank(self.api_key.clone())
            .or_else(|| non_blank(lookup(&self.api_key_env)))
            .ok_or_else(|| ConfigurationError::MissingSetting {
                setting: "API credential",
                env: self.api_key_env.clone(),
            })?;

        let model = non_blank(self.model.clone())
            .or_else(|| non_blank(lookup(&self.model_env)))
            .ok_or_else(|| ConfigurationError::MissingSetting {
                setting: "model identifier",
                env: self.model_env.clone(),
            })?;

        if self.base_url.trim().is_empty() {
            return Err(ConfigurationError::Invalid {
                setting: "provider.base_url",
                message: "must not be empty".to_string(),
            });
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigurationError::Invalid {
                setting: "provider.timeout_seconds",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(ProviderSettings {
            base_url: self.base_url.trim().to_string(),
            api_key,
            model,
            timeout: Duration::from_secs(self.timeout_seconds),
            referer: non_blank(self.referer.clone()),
            title: non_blank(self.title.clone()),
        })
    }

    /// Resolve against the process environment.
    pub fn resolve_from_env(&self) -> Result<ProviderSettings, ConfigurationError> {
        self.resolve(|name| std::env::var(name).ok())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
