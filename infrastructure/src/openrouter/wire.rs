//! Chat completions wire format (OpenAI-compatible)

use serde::{Deserialize, Serialize};
use wayfarer_application::CompletionError;
use wayfarer_domain::CompletionRequest;

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|turn| WireMessage {
                    role: turn.role().as_str(),
                    content: turn.content(),
                })
                .collect(),
        }
    }
}

/// Response body; `error` is set by some gateways instead of a non-2xx status
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Extract `choices[0].message.content` from a response body.
pub(crate) fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(CompletionError::MalformedResponse(format!(
            "service reported an error: {}",
            error.message
        )));
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyChoices)?;

    choice.message.content.ok_or_else(|| {
        CompletionError::MalformedResponse("first choice has no message content".to_string())
    })
}
