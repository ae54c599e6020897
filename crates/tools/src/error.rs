//! Error types for fitsgen-tools

use thiserror::Error;

/// Errors surfaced when resolving and running declaration tools
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("no tool registered under '{name}'")]
    NotFound { name: String },

    #[error("tool '{name}' is not available for this environment")]
    Unavailable { name: String },

    #[error("unrecognized option '{name}'")]
    UnknownOption { name: String },

    #[error("environment error: {0}")]
    Env(#[from] fitsgen_env::EnvError),
}
