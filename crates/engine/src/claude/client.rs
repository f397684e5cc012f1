//! Claude API client for SQL generation.
//!
//! Non-streaming access to the Anthropic Messages API: the pipeline needs
//! exactly one completion per question, so there is nothing to stream.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::ClaudeConfig;

use super::CompletionClient;
use super::error::{ApiErrorResponse, ClaudeError};
use super::types::{ChatRequest, ChatResponse, Message};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Cap on completion length. A SQL statement for a four-table schema fits
/// comfortably; anything longer is the model explaining itself.
const MAX_TOKENS: u32 = 256;

/// Lowest temperature, for determinism-oriented generation.
const TEMPERATURE: f32 = 0.0;

/// Claude API client.
///
/// Cheap to clone; the HTTP client and model name are shared behind an `Arc`.
#[derive(Clone)]
pub struct ClaudeClient {
    inner: Arc<ClaudeClientInner>,
}

struct ClaudeClientInner {
    client: reqwest::Client,
    model: String,
}

impl ClaudeClient {
    /// Create a new Claude client.
    ///
    /// # Arguments
    ///
    /// * `config` - Claude API configuration containing API key and model
    ///
    /// # Errors
    ///
    /// Returns [`ClaudeError::InvalidKey`] if the API key cannot be used as
    /// an HTTP header value, and [`ClaudeError::Http`] if the HTTP client
    /// cannot be built.
    pub fn new(config: &ClaudeConfig) -> Result<Self, ClaudeError> {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| ClaudeError::InvalidKey(e.to_string()))?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            inner: Arc::new(ClaudeClientInner {
                client,
                model: config.model.clone(),
            }),
        })
    }

    /// Send a single-message chat request and get the complete response.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self, prompt), fields(model = %self.inner.model))]
    async fn chat(&self, prompt: &str) -> Result<ChatResponse, ClaudeError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message::user(prompt)],
            temperature: Some(TEMPERATURE),
        };

        let response = self
            .inner
            .client
            .post(ANTHROPIC_API_URL)
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle a successful response.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ChatResponse, ClaudeError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| ClaudeError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ClaudeError {
        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return ClaudeError::RateLimited(retry_after);
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return ClaudeError::Unauthorized("Invalid API key".to_string());
        }

        // Try to parse API error response
        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    ClaudeError::Api {
                        error_type: api_error.error.error_type,
                        message: api_error.error.message,
                    }
                } else {
                    ClaudeError::Api {
                        error_type: "unknown".to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => ClaudeError::Http(e),
        }
    }
}

impl CompletionClient for ClaudeClient {
    async fn complete(&self, prompt: &str) -> Result<String, ClaudeError> {
        let response = self.chat(prompt).await?;
        let text = response.text();
        if text.is_empty() {
            return Err(ClaudeError::Empty);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> ClaudeConfig {
        ClaudeConfig {
            api_key: SecretString::from("sk-ant-api03-KJh2x9QmZ4"),
            model: "claude-sonnet-4-20250514".to_string(),
        }
    }

    #[test]
    fn test_client_construction() {
        let client = ClaudeClient::new(&test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_unprintable_key() {
        let config = ClaudeConfig {
            api_key: SecretString::from("bad\nkey"),
            model: "claude-sonnet-4-20250514".to_string(),
        };
        let result = ClaudeClient::new(&config);
        assert!(matches!(result, Err(ClaudeError::InvalidKey(_))));
    }

    #[test]
    fn test_claude_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<ClaudeClient>();
    }

    #[test]
    fn test_claude_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClaudeClient>();
    }
}
