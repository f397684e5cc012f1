//! Claude API integration for SQL generation.
//!
//! The pipeline consumes the model purely as a text-in/text-out capability:
//! one prompt, one completion, no conversation state and no tool use. The
//! [`CompletionClient`] trait is that capability's seam, so tests can inject
//! a scripted fake instead of the real API.

pub mod client;
pub mod error;
pub mod types;

pub use client::ClaudeClient;
pub use error::ClaudeError;

/// An opaque completion capability: given a prompt, return raw text.
///
/// [`ClaudeClient`] is the production implementation; tests provide fakes
/// with canned SQL or canned failures.
#[allow(async_fn_in_trait)] // futures are driven on the caller's task; no Send bound needed
pub trait CompletionClient {
    /// Send the prompt and return the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns [`ClaudeError`] if the transport or the provider fails. The
    /// caller must not swallow this; the pipeline converts it into a
    /// user-visible failure.
    async fn complete(&self, prompt: &str) -> Result<String, ClaudeError>;
}
