//! Shared helpers for askdb integration tests.
//!
//! The pipeline's completion seam lets these tests run hermetically: a
//! [`ScriptedCompletion`] stands in for the Claude API, and the dataset is
//! in-memory SQLite, so nothing here needs credentials or a network.

use askdb_engine::claude::{ClaudeError, CompletionClient};

/// A completion client that returns a canned response.
pub enum ScriptedCompletion {
    /// Always answer with this text (as the raw, possibly fenced completion).
    Text(String),
    /// Always fail with an unauthorized error carrying this message.
    Unauthorized(String),
}

impl ScriptedCompletion {
    /// A client that answers every prompt with `completion`.
    #[must_use]
    pub fn text(completion: &str) -> Self {
        Self::Text(completion.to_string())
    }

    /// A client whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self::Unauthorized("scripted failure".to_string())
    }
}

impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, ClaudeError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Unauthorized(message) => Err(ClaudeError::Unauthorized(message.clone())),
        }
    }
}
