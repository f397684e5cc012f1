//! askdb Engine - natural-language questions answered with SQL.
//!
//! The engine turns a free-text question into a SQL query with a Claude
//! completion call, runs that query against a freshly provisioned in-memory
//! sample database, and renders the result as a text table.
//!
//! # Pipeline
//!
//! ```text
//! question -> prompt -> completion -> sanitize -> provision -> execute -> format
//! ```
//!
//! Every request provisions its own disposable SQLite instance, so requests
//! share no state and the generated statement can do no lasting harm.
//!
//! # Modules
//!
//! - [`config`] - Environment-loaded configuration (API credential, model)
//! - [`claude`] - Anthropic Messages API client and the [`claude::CompletionClient`] seam
//! - [`schema`] - Table specs: one source for DDL and the prompt-facing descriptor
//! - [`dataset`] - Ephemeral sample database provisioner
//! - [`prompt`] - Prompt assembly
//! - [`sanitize`] - Code-fence stripping of model output
//! - [`exec`] - Query execution against a provisioned database
//! - [`format`] - Text-table rendering with truncation
//! - [`pipeline`] - End-to-end orchestration with the two-output contract

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod claude;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exec;
pub mod format;
pub mod pipeline;
pub mod prompt;
pub mod sanitize;
pub mod schema;

pub use claude::{ClaudeClient, CompletionClient};
pub use config::{ClaudeConfig, ConfigError, EngineConfig};
pub use error::EngineError;
pub use pipeline::Answer;
pub use schema::DatasetVariant;
