//! OpenAI-compatible HTTP implementation of the rewrite service.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;

use crate::error::GlossError;

use super::model::{RewriteMode, RewriteRequest};
use super::service::RewriteService;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Configuration for [`OpenAiRewriteService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiRewriteConfig {
    /// Base API URL (e.g., `https://api.openai.com/v1`).
    pub base_url: String,
    /// Model identifier sent in chat-completions requests.
    pub model: String,
    /// API key used for bearer authentication.
    pub api_key: Option<String>,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for OpenAiRewriteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OpenAiRewriteConfig {
    /// Constructs configuration with required API settings.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            timeout,
        }
    }
}

/// OpenAI-compatible rewrite service implementation.
///
/// The HTTP client is built once at construction; a construction failure is
/// a missing-dependency precondition surfaced before any file is touched.
#[derive(Debug, Clone)]
pub struct OpenAiRewriteService {
    config: OpenAiRewriteConfig,
    client: Client,
}

impl OpenAiRewriteService {
    /// Creates a service from explicit configuration, building the shared
    /// HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`GlossError::Configuration`] when the client cannot be
    /// constructed.
    pub fn from_config(config: OpenAiRewriteConfig) -> Result<Self, GlossError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| GlossError::Configuration {
                message: format!("failed to configure AI HTTP client: {error}"),
            })?;

        Ok(Self { config, client })
    }

    fn extract_api_key(&self) -> Result<&str, GlossError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(GlossError::MissingApiKey)
    }
}

impl RewriteService for OpenAiRewriteService {
    fn rewrite_text(&self, request: &RewriteRequest) -> Result<String, GlossError> {
        let api_key = self.extract_api_key()?;
        let endpoint = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = ChatCompletionsRequest {
            model: self.config.model.as_str(),
            messages: vec![
                ChatCompletionsMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatCompletionsMessage {
                    role: "user",
                    content: build_user_prompt(request),
                },
            ],
        };

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .map_err(|error| GlossError::Network {
                message: format!("AI request transport failed: {error}"),
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(content.as_str(), 160),
            );
            return Err(GlossError::Api {
                message: format!("AI request failed with status {}: {body}", status.as_u16()),
            });
        }

        let response_payload: ChatCompletionsResponse =
            response.json().map_err(|error| GlossError::Api {
                message: format!("AI response JSON decoding failed: {error}"),
            })?;

        // The completion is spliced back verbatim: no trimming and no
        // emptiness or format validation.
        response_payload
            .choices
            .first()
            .and_then(|choice| parse_content_value(&choice.message.content))
            .map(ToOwned::to_owned)
            .ok_or_else(|| GlossError::Api {
                message: "AI response did not contain assistant text".to_owned(),
            })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionsMessage>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionsMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, serde::Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ChatContent {
    Text(String),
    Parts(Vec<ChatContentPart>),
}

#[derive(Debug, serde::Deserialize)]
struct ChatContentPart {
    text: Option<String>,
    content: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatChoiceMessage {
    content: ChatContent,
}

fn build_user_prompt(request: &RewriteRequest) -> String {
    let instruction = match request.mode() {
        RewriteMode::Improve => concat!(
            "I have the following C# code. I need you to correct and improve the comments ",
            "without modifying the code. Maintain the original indentation and ensure that ",
            "the comments are clear and precise. Do not include any introductory phrases ",
            "or markdown formatting in your response."
        ),
        RewriteMode::Grammar => concat!(
            "I have the following C# documentation comments. Fix only the grammar without ",
            "modifying the code. Leave summary lines that begin with a fixed prefix and ",
            "constructor-introduction lines unchanged, and maintain the original ",
            "indentation. Do not include any introductory phrases or markdown formatting ",
            "in your response."
        ),
    };

    format!("{instruction}\n\n{}", request.span_text())
}

fn parse_content_value(content: &ChatContent) -> Option<&str> {
    match content {
        ChatContent::Text(text) => Some(text.as_str()),
        ChatContent::Parts(parts) => parts
            .iter()
            .find_map(|part| part.text.as_deref().or(part.content.as_deref())),
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
