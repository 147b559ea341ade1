#![deny(warnings)]

//! Concierge chat transport: a thin client around the hosted completion
//! API backing the site's advisor widget.
//!
//! The client is constructed explicitly and injected where needed; there
//! is no module-level instance. One request per user message, no retry,
//! no timeout tuning; a failed call surfaces as an error and the widget
//! apologizes.

use estate_core::Catalog;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// OpenAI-compatible endpoint of the hosted completion service.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Model the advisor widget runs on.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Environment variable read by [`ChatConfig::from_env`].
pub const API_KEY_ENV: &str = "HANDOFF_CHAT_API_KEY";

/// Opening message shown before the visitor has typed anything.
pub const GREETING: &str = "Welcome to HANDOFF. I am your private advisor for \
premium real-estate assets. How can I help you today?";

/// Errors produced by the concierge transport.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key available; the widget should stay hidden.
    #[error("missing api key: set HANDOFF_CHAT_API_KEY")]
    MissingApiKey,
    /// Connection or protocol failure below the API layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("api returned status {status}: {body}")]
    Api { status: u16, body: String },
    /// A well-formed completion with nothing in it.
    #[error("completion contained no choices")]
    EmptyCompletion,
}

/// Connection settings for the completion API.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// Base URL up to (not including) `/chat/completions`.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion budget; the advisor answers in one sentence.
    pub max_tokens: u32,
}

impl ChatConfig {
    /// Production defaults with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 100,
        }
    }

    /// Read the key from [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, ChatError> {
        std::env::var(API_KEY_ENV)
            .map(Self::new)
            .map_err(|_| ChatError::MissingApiKey)
    }
}

/// Speaker of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of the conversation, in API wire shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
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

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered widget history, greeting first. Each exchange appends; the
/// whole window is sent with every request.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a conversation with the standard greeting.
    pub fn opening() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// The outbound message window, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChatMessage,
}

/// Client around the completion API. Construct once, inject, drop on
/// shutdown.
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
    system_prompt: String,
}

impl ChatClient {
    pub fn new(config: ChatConfig, system_prompt: String) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            config,
            system_prompt,
        })
    }

    /// Send the conversation and return the advisor's reply. One attempt;
    /// the caller decides what a failure looks like in the widget.
    pub async fn send(&self, conversation: &Conversation) -> Result<String, ChatError> {
        let mut messages = Vec::with_capacity(conversation.messages().len() + 1);
        messages.push(ChatMessage::system(&self.system_prompt));
        messages.extend_from_slice(conversation.messages());

        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        debug!(model = %self.config.model, "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatError::EmptyCompletion)
    }
}

/// Compact price tag for prompt text, e.g. "USD 4.2M" or "USD 620K".
pub fn format_price(price_usd: Decimal) -> String {
    let value = price_usd.to_f64().unwrap_or(0.0);
    if value >= 1_000_000.0 {
        format!("USD {:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("USD {:.0}K", value / 1_000.0)
    } else {
        format!("USD {value:.0}")
    }
}

/// Assemble the advisor system prompt from catalog facts: the response
/// contract, the tracked zones with their rate assumptions, and the
/// signature listings.
pub fn advisor_prompt(catalog: &Catalog) -> String {
    let mut prompt = String::from(
        "You are the HANDOFF private advisor, an expert in premium real-estate \
         markets with a refined, discreet tone.\n\
         Answer in ONE concise sentence of at most 30 words, straight to the \
         point, closing with a key figure or a quiet call to action when it fits.\n\
         Contact: +54 11 4567-8900 | contacto@handoff.com.ar\n\nZones:\n",
    );
    for zone in &catalog.zones {
        prompt.push_str(&format!(
            "- {}: {:.1}% annual appreciation, {:.1}% rental yield\n",
            zone.name, zone.appreciation_rate_pct, zone.rental_yield_pct
        ));
    }
    prompt.push_str("\nSignature listings:\n");
    for property in &catalog.properties {
        prompt.push_str(&format!(
            "- {} ({}) - {} - {}\n",
            property.title,
            property.location,
            format_price(property.price_usd),
            property.summary
        ));
    }
    prompt
}
