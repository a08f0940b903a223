//! OpenRouter completion client
//!
//! Implements [`CompletionClient`] with a single blocking-from-the-caller
//! `POST /chat/completions` per call. No retries.

use super::wire::{ChatCompletionBody, parse_completion};
use crate::config::{ConfigurationError, ProviderSettings};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use wayfarer_application::{CompletionClient, CompletionError};
use wayfarer_domain::CompletionRequest;

/// Maximum number of characters of an error body kept in [`CompletionError::Status`]
const MAX_ERROR_BODY: usize = 500;

pub struct OpenRouterClient {
    http: Client,
    endpoint: String,
    api_key: String,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterClient {
    /// Create a client from resolved provider settings.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ConfigurationError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key: settings.api_key.clone(),
            referer: settings.referer.clone(),
            title: settings.title.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatCompletionBody::from(request);

        let mut builder = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(referer) = &self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            builder = builder.header("X-Title", title);
        }

        debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = builder.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        debug!(status = status.as_u16(), bytes = text.len(), "Chat completion received");
        parse_completion(&text)
    }
}

fn map_transport_error(e: reqwest::Error) -> CompletionError {
    if e.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Transport(e.to_string())
    }
}
