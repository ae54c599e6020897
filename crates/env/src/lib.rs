//! fitsgen-env: Build-environment model for the fitsGen declaration layer
//!
//! This crate provides the mutable configuration object that declaration
//! tools operate on:
//! - `Value`: variant type for environment variables and library specs
//! - `Environment`: the capability set a build environment may support
//! - `BuildEnv`: in-memory environment recording every mutation in order

mod env;
mod error;
mod value;

pub use env::{BuildEnv, Environment};
pub use error::EnvError;
pub use value::Value;

/// Result type for environment operations
pub type Result<T> = std::result::Result<T, EnvError>;
