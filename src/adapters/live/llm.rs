//! Live adapter for the `LlmClient` port using an OpenAI-compatible chat endpoint.

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::GenerationError;
use crate::ports::{CompletionRequest, LlmClient, PortFuture};

const SERVICE: &str = "Completion";

/// Live LLM client posting to a chat-completion endpoint (OpenRouter by default).
pub struct LiveLlmClient {
    client: Client,
    endpoint: String,
    api_key: String,
    referer: String,
    title: String,
}

impl LiveLlmClient {
    /// Creates a completion client from the loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP client cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| format!("Failed to build completion HTTP client: {e}"))?;
        Ok(Self {
            client,
            endpoint: settings.completion_url.clone(),
            api_key: settings.api_key.clone(),
            referer: settings.referer.clone(),
            title: settings.title.clone(),
        })
    }
}

/// Request body sent to the chat-completion endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

/// A single message in the request.
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl LlmClient for LiveLlmClient {
    fn complete(&self, request: &CompletionRequest) -> PortFuture<'_, String> {
        let request = request.clone();

        Box::pin(async move {
            let body = ChatRequest {
                model: &request.model,
                messages: [ChatMessage {
                    role: "user",
                    content: &request.prompt,
                }],
            };

            debug!(
                endpoint = %self.endpoint,
                model = %request.model,
                prompt_len = request.prompt.len(),
                "requesting completion"
            );

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .header("HTTP-Referer", &self.referer)
                .header("X-Title", &self.title)
                .json(&body)
                .send()
                .await
                .map_err(|e| GenerationError::transport(SERVICE, &e))?;

            let status = response.status();
            if !status.is_success() {
                warn!(status = status.as_u16(), "completion request rejected");
                return Err(GenerationError::CompletionRequest {
                    status: status.as_u16(),
                });
            }

            let text = response
                .text()
                .await
                .map_err(|e| GenerationError::transport(SERVICE, &e))?;
            extract_content(&text)
        })
    }
}

/// Pulls `choices[0].message.content` out of a response body and trims it.
fn extract_content(body: &str) -> Result<String, GenerationError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| GenerationError::InvalidCompletionResponse)?;
    value
        .pointer("/choices/0/message/content")
        .and_then(serde_json::Value::as_str)
        .filter(|content| !content.is_empty())
        .map(|content| content.trim().to_string())
        .ok_or(GenerationError::InvalidCompletionResponse)
}
