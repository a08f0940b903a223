//! Completion client port
//!
//! Defines the interface for asking the remote model for a reply.

use async_trait::async_trait;
use thiserror::Error;
use wayfarer_domain::CompletionRequest;

/// Errors that can occur while contacting the completion service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Completion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no choices")]
    EmptyChoices,
}

/// Client for the external completion service
///
/// One call is one request: implementations do not retry.
/// Adapters live in the infrastructure layer.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the ordered turns and return the first choice's content unmodified.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
