//! Error types for fitsgen-env

use thiserror::Error;

/// Errors surfaced by environment operations
///
/// Both variants propagate unmodified to the orchestrator; no recovery or
/// retry happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("environment does not support '{op}'")]
    MissingCapability { op: String },

    #[error("environment variable '{name}' is not defined")]
    UndefinedVariable { name: String },
}

impl EnvError {
    pub(crate) fn missing_capability(op: &str) -> Self {
        EnvError::MissingCapability { op: op.to_string() }
    }
}
