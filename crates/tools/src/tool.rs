//! The tool boundary contract and name-keyed tool set

use std::collections::BTreeMap;

use fitsgen_env::Environment;
use tracing::debug;

use crate::error::ToolError;
use crate::options::GenerateOptions;

/// A named declaration unit the orchestrator can apply to an environment.
///
/// `generate` and `exists` are the entire boundary contract expected by the
/// orchestrator's plugin-discovery mechanism.
pub trait Tool {
    /// Name under which the orchestrator discovers this tool.
    fn name(&self) -> &str;

    /// Mutate the environment with this tool's declarations.
    ///
    /// Stateless and single-shot: either completes or raises synchronously,
    /// and returns no value beyond the mutated environment.
    fn generate(
        &self,
        env: &mut dyn Environment,
        options: &GenerateOptions,
    ) -> Result<(), ToolError>;

    /// Whether this tool can run against the given environment.
    fn exists(&self, env: &dyn Environment) -> bool {
        let _ = env;
        true
    }
}

/// Name-keyed collection of declaration tools.
#[derive(Default)]
pub struct ToolSet {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolSet {
    /// Create an empty tool set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name, replacing any previous entry.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Check whether a tool is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Look up `name`, probe its availability, and run its generation pass.
    ///
    /// Dependency requests the tool records on the environment are left for
    /// the caller to process; nothing is applied recursively.
    pub fn apply(
        &self,
        name: &str,
        env: &mut dyn Environment,
        options: &GenerateOptions,
    ) -> Result<(), ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound { name: name.to_string() })?;

        if !tool.exists(env) {
            return Err(ToolError::Unavailable { name: name.to_string() });
        }

        debug!(tool = name, deps_only = options.deps_only, "applying tool");
        tool.generate(env, options)
    }
}
