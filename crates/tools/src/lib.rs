//! fitsgen-tools: Declaration tools for the fitsGen build
//!
//! This crate provides the tool side of the declaration layer:
//! - `Tool`: the `generate`/`exists` boundary contract the orchestrator's
//!   plugin discovery expects
//! - `ToolSet`: name-keyed lookup and application of registered tools
//! - `GenerateOptions`: explicit options structure replacing the
//!   orchestrator's open keyword bag
//! - `FitsGenApps`: the fitsGen applications-library declarator

mod error;
mod fitsgen;
mod options;
mod tool;

pub use error::ToolError;
pub use fitsgen::{DEPENDENCIES, FitsGenApps, LIBRARY, ROOT_GUI_LIBS};
pub use options::GenerateOptions;
pub use tool::{Tool, ToolSet};

// Re-export environment types for convenience
pub use fitsgen_env::{BuildEnv, EnvError, Environment, Value};

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;
