// ---------------------------------------------------------------------------
// Block summarization — OpenAI-compatible chat backend behind a trait
// ---------------------------------------------------------------------------

use crate::types::{BlockKind, Config};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Sentinel returned whenever no meaningful summary could be produced.
pub const NO_SUMMARY: &str = "No summary generated.";

/// Few-shot examples prepended to every prompt to pin down the reply format.
const FEW_SHOT_EXAMPLES: &str = r#"Example 1:
Function:
def greet(name):
    """Greets the user."""
    return f"Hi {name}"
Summary:
This function `greet(name)` takes a `name` as input and returns a personalized greeting message.

Example 2:
Class:
class Calculator:
    def __init__(self):
        self.result = 0

    def add(self, a, b):
        return a + b
Summary:
The `Calculator` class initializes with a `result` of 0. It includes an `add` method that takes two numbers, `a` and `b`, and returns their sum.

Example 3:
Function:
public static void main(String[] args) {
    System.out.println("Hello, World!");
}
Summary:
The `main` function is the entry point of a Java program. It prints "Hello, World!" to the console."#;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A summarization backend consumed one call per block.
///
/// The contract is best-effort: implementations return natural-language text,
/// or the [`NO_SUMMARY`] sentinel on failure — never an error.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, kind: BlockKind, code: &str) -> String;
}

// ---------------------------------------------------------------------------
// OpenAI-compatible HTTP implementation
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Summarizer backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    config: Config,
}

impl OpenAiSummarizer {
    /// Build a summarizer from explicit configuration plus the `OPENAI_API_KEY`
    /// environment variable. Fails fast when the key is absent.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set; export it or run with --dry-run")?;
        Ok(Self {
            client: Client::new(),
            api_key,
            config: config.clone(),
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, "Requesting chat completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("chat completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("summarization endpoint returned {status}: {error_body}");
        }

        let chat: ChatResponse = response
            .json()
            .await
            .context("failed to parse chat completion response")?;

        Ok(chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, kind: BlockKind, code: &str) -> String {
        let prompt =
            format!("{FEW_SHOT_EXAMPLES}\n\nNow summarize the following {kind}:\n```{code}```");
        match self.complete(&prompt).await {
            Ok(reply) => clean_reply(&reply),
            Err(e) => {
                warn!(error = %e, "Summarization failed");
                NO_SUMMARY.to_string()
            }
        }
    }
}

/// Strip an optional leading `Summary:` label; empty replies become the sentinel.
fn clean_reply(reply: &str) -> String {
    let text = reply.trim();
    let text = text.strip_prefix("Summary:").map(str::trim).unwrap_or(text);
    if text.is_empty() {
        NO_SUMMARY.to_string()
    } else {
        text.to_string()
    }
}

// ---------------------------------------------------------------------------
// Canned-response implementation (dry runs and tests)
// ---------------------------------------------------------------------------

/// Summarizer that returns a fixed string without touching the network.
/// Defaults to the sentinel, which is what `--dry-run` reports.
pub struct StaticSummarizer {
    response: Option<String>,
}

impl StaticSummarizer {
    pub fn new() -> Self {
        Self { response: None }
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }
}

impl Default for StaticSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn summarize(&self, _kind: BlockKind, _code: &str) -> String {
        self.response
            .clone()
            .unwrap_or_else(|| NO_SUMMARY.to_string())
    }
}
