// src/summarize.rs
//! Thin chat-completions client used for the weekly summary.
//!
//! The client never substitutes content on failure; fallback policy belongs
//! to the caller. The key is injected at construction and replaceable via
//! [`SummaryClient::set_api_key`] for interactive reconfiguration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUMMARY_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o";

/// Returned when the response carries no usable content.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No summary generated";

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summarizer API key is not configured")]
    Unauthenticated,
    #[error("summary request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("summarizer returned HTTP status {0}")]
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub content: String,
    /// Target summary length in characters; also bounds max_tokens.
    pub max_length: usize,
    pub temperature: f32,
}

impl SummaryRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            max_length: 200,
            temperature: 0.5,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl SummaryClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("ai-news-hub/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Replace or clear the key; the next request uses the new value.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One chat-completions round-trip. Fails `Unauthenticated` before any
    /// network I/O when no key is configured.
    pub async fn generate_summary(&self, req: &SummaryRequest) -> Result<String, SummaryError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SummaryError::Unauthenticated);
        };

        let system = format!(
            "You are an AI news summarizer. Summarize the following content concisely in about {} characters.",
            req.max_length
        );
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: &req.content,
                },
            ],
            temperature: req.temperature,
            // Approximate token bound for the requested character length.
            max_tokens: (req.max_length / 3).max(1) as u32,
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SummaryError::Status(resp.status().as_u16()));
        }

        let parsed: ChatResponse = resp.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| EMPTY_SUMMARY_PLACEHOLDER.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_before_any_network_call() {
        // Unroutable base URL: reaching the network would surface Transport.
        let client = SummaryClient::new("http://127.0.0.1:0", DEFAULT_SUMMARY_MODEL, None);
        let err = client
            .generate_summary(&SummaryRequest::new("anything"))
            .await
            .unwrap_err();
        assert!(matches!(err, SummaryError::Unauthenticated));
    }

    #[test]
    fn blank_keys_count_as_absent() {
        let mut client =
            SummaryClient::new(DEFAULT_SUMMARY_BASE_URL, DEFAULT_SUMMARY_MODEL, Some("  ".into()));
        assert!(!client.has_api_key());
        client.set_api_key(Some("sk-test".into()));
        assert!(client.has_api_key());
        client.set_api_key(None);
        assert!(!client.has_api_key());
    }
}
