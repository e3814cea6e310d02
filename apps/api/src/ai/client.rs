/// AI client — the single point of entry for all completion-provider calls.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// All AI interactions MUST go through this module.
///
/// The provider is chosen once at startup from configuration and passed in
/// as a tagged variant; nothing here reads the environment.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const HOSTED_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Hosted model is intentionally hardcoded to prevent accidental drift.
pub const HOSTED_MODEL: &str = "gpt-4-turbo-preview";
const HOSTED_SYSTEM_PROMPT: &str =
    "You are an ATS resume optimization expert. Return only valid JSON.";

/// Fixed sampling parameters, shared by both providers.
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyContent,
}

/// Which completion backend to talk to. Constructed in `config.rs`.
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    /// Hosted chat-completion API with structured JSON-mode responses.
    Hosted { api_key: String },
    /// Locally-addressed generation API returning raw text parsed as JSON.
    Local { base_url: String, model: String },
}

impl ProviderConfig {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderConfig::Hosted { .. } => "openai",
            ProviderConfig::Local { .. } => "ollama",
        }
    }
}

// ── Hosted (chat completions) wire types ────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HostedError {
    error: HostedErrorBody,
}

#[derive(Debug, Deserialize)]
struct HostedErrorBody {
    message: String,
}

// ── Local (generation API) wire types ───────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'static str,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// The single AI client used by all services. Wraps one of two completion
/// backends behind `complete`; failures propagate without retry.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    provider: ProviderConfig,
}

impl AiClient {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            provider,
        }
    }

    pub fn provider_label(&self) -> &'static str {
        self.provider.label()
    }

    /// Submits a prompt and returns the provider's raw text response.
    pub async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        match &self.provider {
            ProviderConfig::Hosted { api_key } => self.complete_hosted(api_key, prompt).await,
            ProviderConfig::Local { base_url, model } => {
                self.complete_local(base_url, model, prompt).await
            }
        }
    }

    /// Convenience method that calls the provider and parses the text
    /// response strictly as JSON. The prompt must demand JSON-only output.
    pub async fn complete_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, AiError> {
        let text = self.complete(prompt).await?;
        let text = strip_json_fences(&text);
        serde_json::from_str(text).map_err(AiError::Parse)
    }

    async fn complete_hosted(&self, api_key: &str, prompt: &str) -> Result<String, AiError> {
        let request_body = ChatRequest {
            model: HOSTED_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: HOSTED_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(HOSTED_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<HostedError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AiError::EmptyContent)?;

        debug!("hosted completion succeeded ({} chars)", content.len());
        Ok(content)
    }

    async fn complete_local(
        &self,
        base_url: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, AiError> {
        let request_body = GenerateRequest {
            model,
            prompt,
            stream: false,
            format: "json",
            options: GenerateOptions {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let url = format!("{}/api/generate", base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;
        if generated.response.trim().is_empty() {
            return Err(AiError::EmptyContent);
        }

        debug!(
            "local completion succeeded ({} chars)",
            generated.response.len()
        );
        Ok(generated.response)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from provider output.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_provider_labels() {
        let hosted = ProviderConfig::Hosted {
            api_key: "k".into(),
        };
        let local = ProviderConfig::Local {
            base_url: "http://localhost:11434".into(),
            model: "llama3.1".into(),
        };
        assert_eq!(hosted.label(), "openai");
        assert_eq!(local.label(), "ollama");
    }
}
