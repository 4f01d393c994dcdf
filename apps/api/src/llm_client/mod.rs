/// LLM Client: the single point of entry for all language-model calls.
///
/// ARCHITECTURAL RULE: No other module may talk to the completion API directly.
/// Components hold an `Arc<dyn LlmGateway>` and go through `call_text` /
/// `call_json`, which enforce the credential gate before anything is sent.
///
/// One attempt per call. There is no retry loop here or in any caller: every
/// component owns a deterministic fallback for the failure case.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;
#[cfg(test)]
pub mod testing;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM credential is not configured")]
    NotConfigured,

    #[error("Invalid completion request: {0}")]
    InvalidRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed LLM response: {0}")]
    Malformed(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single completion call: ordered messages plus sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Builds the usual system + user pair.
    pub fn new(
        model: &str,
        system: &str,
        prompt: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            model: model.to_string(),
            max_tokens,
            temperature,
        }
    }

    pub fn validate(&self) -> Result<(), LlmError> {
        if self.messages.is_empty() {
            return Err(LlmError::InvalidRequest("messages cannot be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(LlmError::InvalidRequest(format!(
                "temperature must be in [0, 1], got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(LlmError::InvalidRequest("max_tokens must be positive".into()));
        }
        Ok(())
    }
}

/// Boundary over an external text-completion service.
///
/// Carried in `AppState` as `Arc<dyn LlmGateway>` so tests can swap in doubles.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// False when no usable credential exists. Callers never reach `complete` then.
    fn is_configured(&self) -> bool;

    /// Model name used for requests built by the components.
    fn model(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// Sends one request through the gateway, short-circuiting when it is unconfigured.
pub async fn call_text(
    gateway: &dyn LlmGateway,
    request: &CompletionRequest,
) -> Result<String, LlmError> {
    if !gateway.is_configured() {
        return Err(LlmError::NotConfigured);
    }
    request.validate()?;
    gateway.complete(request).await
}

/// Calls the gateway and deserializes the reply as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn call_json<T: DeserializeOwned>(
    gateway: &dyn LlmGateway,
    request: &CompletionRequest,
) -> Result<T, LlmError> {
    let text = call_text(gateway, request).await?;
    parse_json(&text)
}

/// Parses model output as JSON after removing code fences. Any prose around
/// the payload makes this fail.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI-compatible HTTP client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
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
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for any endpoint implementing `/chat/completions` (Groq by default).
/// Cheap to clone: `reqwest::Client` is an `Arc` internally.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.llm_api_url.clone(),
            api_key: config.llm_api_key.clone(),
            model: config.llm_model.clone(),
        })
    }
}

#[async_trait]
impl LlmGateway for LlmClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        request.validate()?;

        let body = ChatCompletionRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        let parsed: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                request.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion_text(parsed)
    }
}

/// Uses the provider's `error.message` when the body carries one, else the raw body.
fn api_error(status: u16, body: String) -> LlmError {
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api { status, message }
}

/// Text of the first choice. Missing, null or blank content is an error.
fn completion_text(response: ChatCompletionResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(LlmError::EmptyContent)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
