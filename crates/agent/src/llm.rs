use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use unibase_core::config::{LlmConfig, LlmProvider};
use unibase_core::errors::DomainError;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// One chat turn: a system prompt and a single user message.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Ask the provider to constrain output to a JSON object where supported.
    pub json_mode: bool,
}

impl CompletionRequest {
    pub fn json(system_prompt: &str, user_message: String, max_tokens: u32) -> Self {
        Self {
            system_prompt: system_prompt.to_string(),
            user_message,
            max_tokens,
            temperature: DEFAULT_TEMPERATURE,
            json_mode: true,
        }
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    fn provider(&self) -> &'static str;
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Where a generated report came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Provider,
    Mock,
    Fallback,
}

/// Builds the configured provider client. `Ok(None)` means the mock provider.
pub fn client_from_config(config: &LlmConfig) -> Result<Option<Arc<dyn LlmClient>>> {
    let api_key = || {
        config
            .api_key
            .clone()
            .ok_or_else(|| anyhow!("llm.api_key is required for {}", config.provider.as_str()))
    };
    let timeout = Duration::from_secs(config.timeout_secs);
    let model = config.effective_model().to_string();

    let client: Arc<dyn LlmClient> = match config.provider {
        LlmProvider::Mock => return Ok(None),
        LlmProvider::OpenAi => Arc::new(OpenAiClient::new(
            api_key()?,
            model,
            config.base_url.clone().unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            timeout,
        )?),
        LlmProvider::Anthropic => Arc::new(AnthropicClient::new(
            api_key()?,
            model,
            config.base_url.clone().unwrap_or_else(|| ANTHROPIC_BASE_URL.to_string()),
            timeout,
        )?),
    };

    Ok(Some(client))
}

/// Calls `client` and parses its reply, falling back to `fallback` when there
/// is no client or anything goes wrong. Never fails.
pub async fn generate_with_fallback<T, P, F>(
    client: Option<&dyn LlmClient>,
    request: &CompletionRequest,
    parse: P,
    fallback: F,
    event_name: &'static str,
    correlation_id: &str,
) -> (T, ReportSource)
where
    P: FnOnce(&str) -> Result<T, DomainError>,
    F: FnOnce() -> T,
{
    let Some(client) = client else {
        return (fallback(), ReportSource::Mock);
    };

    let reply = match client.complete(request).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(
                event_name = event_name,
                correlation_id = correlation_id,
                provider = client.provider(),
                error = %err,
                "provider call failed, using fallback"
            );
            return (fallback(), ReportSource::Fallback);
        }
    };

    match parse(&reply) {
        Ok(value) => (value, ReportSource::Provider),
        Err(err) => {
            warn!(
                event_name = event_name,
                correlation_id = correlation_id,
                provider = client.provider(),
                error = %err,
                "provider reply could not be parsed, using fallback"
            );
            (fallback(), ReportSource::Fallback)
        }
    }
}

fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder().timeout(timeout).build().context("failed to build http client")
}

async fn read_success(response: reqwest::Response, provider: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(provider = provider, status = status.as_u16(), "provider returned an error status");
    Err(anyhow!("{provider} API returned {status}: {body}"))
}

pub struct OpenAiClient {
    api_key: SecretString,
    model: String,
    endpoint: String,
    client: Client,
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: [OpenAiMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<OpenAiResponseFormat>,
}

#[derive(Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct OpenAiResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiReply,
}

#[derive(Deserialize)]
struct OpenAiReply {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(
        api_key: SecretString,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            api_key,
            model,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            client: http_client(timeout)?,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = OpenAiRequest {
            model: &self.model,
            messages: [
                OpenAiMessage { role: "system", content: &request.system_prompt },
                OpenAiMessage { role: "user", content: &request.user_message },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request
                .json_mode
                .then_some(OpenAiResponseFormat { kind: "json_object" }),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .context("openai request failed")?;

        let parsed: OpenAiResponse = read_success(response, self.provider())
            .await?
            .json()
            .await
            .context("failed to decode openai response")?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| anyhow!("openai response contained no content"))
    }
}

pub struct AnthropicClient {
    api_key: SecretString,
    model: String,
    endpoint: String,
    client: Client,
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [AnthropicMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicBlock>,
}

#[derive(Deserialize)]
struct AnthropicBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    pub fn new(
        api_key: SecretString,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            api_key,
            model,
            endpoint: format!("{}/messages", base_url.trim_end_matches('/')),
            client: http_client(timeout)?,
        })
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    fn provider(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = AnthropicRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            system: &request.system_prompt,
            messages: [AnthropicMessage { role: "user", content: &request.user_message }],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let parsed: AnthropicResponse = read_success(response, self.provider())
            .await?
            .json()
            .await
            .context("failed to decode anthropic response")?;

        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| anyhow!("anthropic response contained no text block"))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use super::{CompletionRequest, LlmClient};

    /// Replays a fixed reply and records every request it receives.
    pub struct StubClient {
        reply: Result<String, String>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl StubClient {
        pub fn replying(reply: &str) -> Self {
            Self { reply: Ok(reply.to_string()), requests: Mutex::new(Vec::new()) }
        }

        pub fn failing(message: &str) -> Self {
            Self { reply: Err(message.to_string()), requests: Mutex::new(Vec::new()) }
        }

        pub fn last_request(&self) -> Option<CompletionRequest> {
            self.requests.lock().ok().and_then(|requests| requests.last().cloned())
        }
    }

    #[async_trait]
    impl LlmClient for StubClient {
        fn provider(&self) -> &'static str {
            "stub"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            self.reply.clone().map_err(|message| anyhow!(message))
        }
    }
}
