//! Unified error handling for the engine.

use thiserror::Error;

use crate::claude::ClaudeError;
use crate::config::ConfigError;
use crate::dataset::ProvisionError;
use crate::exec::ExecError;

/// Top-level error type for engine operations.
///
/// The question-answering pipeline never returns this - it converts every
/// failure into user-visible text at its boundary. It exists for the
/// operations that do propagate errors: configuration loading, client
/// construction, and the direct provision/execute entry points the CLI's
/// `schema` and `seed` commands use.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Claude API operation failed.
    #[error("Claude error: {0}")]
    Claude(#[from] ClaudeError),

    /// Dataset provisioning failed.
    #[error("Provisioning error: {0}")]
    Provision(#[from] ProvisionError),

    /// Query execution failed.
    #[error("Execution error: {0}")]
    Exec(#[from] ExecError),
}
