//! The build-environment capability trait and its in-memory implementation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EnvError;
use crate::value::Value;

/// The capability set a build environment may support.
///
/// Orchestrators hand declaration tools an environment implementing
/// whatever subset they actually provide. Each method defaults to
/// [`EnvError::MissingCapability`], so a tool that calls into an
/// unsupported operation gets a typed error instead of a discovery-time
/// failure.
pub trait Environment {
    /// Declare that a named artifact (or list of artifacts) should be
    /// built and linked into the current target.
    fn register_library(&mut self, libs: Value) -> Result<(), EnvError> {
        let _ = libs;
        Err(EnvError::missing_capability("register_library"))
    }

    /// Request that the named tool be applied to this environment.
    ///
    /// Requests are recorded in call order; ordering is significant for
    /// deterministic tool-chain assembly downstream. No deduplication or
    /// cycle detection happens here.
    fn apply_tool(&mut self, name: &str) -> Result<(), EnvError> {
        let _ = name;
        Err(EnvError::missing_capability("apply_tool"))
    }

    /// Look up a variable from the environment's store.
    fn get_variable(&self, name: &str) -> Result<&Value, EnvError> {
        let _ = name;
        Err(EnvError::missing_capability("get_variable"))
    }

    /// Bind a variable in the environment's store.
    fn set_variable(&mut self, name: &str, value: Value) -> Result<(), EnvError> {
        let _ = (name, value);
        Err(EnvError::missing_capability("set_variable"))
    }
}

/// In-memory build environment recording every mutation in order.
///
/// One declaration pass per instance; access is serialized by `&mut`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BuildEnv {
    variables: BTreeMap<String, Value>,
    libraries: Vec<Value>,
    tool_requests: Vec<String>,
}

impl BuildEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a variable and return self, for orchestrator-side setup.
    pub fn with_variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    /// Libraries registered so far, in registration order.
    pub fn libraries(&self) -> &[Value] {
        &self.libraries
    }

    /// Tool applications requested so far, in request order.
    pub fn tool_requests(&self) -> &[String] {
        &self.tool_requests
    }

    /// Registered library names, flattened in registration order.
    ///
    /// Non-string entries inside list registrations are skipped.
    pub fn library_names(&self) -> Vec<&str> {
        fn collect<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
            match value {
                Value::String(s) => out.push(s),
                Value::List(items) => {
                    for item in items {
                        collect(item, out);
                    }
                }
                _ => {}
            }
        }

        let mut names = Vec::new();
        for entry in &self.libraries {
            collect(entry, &mut names);
        }
        names
    }
}

impl Environment for BuildEnv {
    fn register_library(&mut self, libs: Value) -> Result<(), EnvError> {
        debug!(?libs, "registering library");
        self.libraries.push(libs);
        Ok(())
    }

    fn apply_tool(&mut self, name: &str) -> Result<(), EnvError> {
        debug!(tool = name, "recording tool request");
        self.tool_requests.push(name.to_string());
        Ok(())
    }

    fn get_variable(&self, name: &str) -> Result<&Value, EnvError> {
        self.variables
            .get(name)
            .ok_or_else(|| EnvError::UndefinedVariable { name: name.to_string() })
    }

    fn set_variable(&mut self, name: &str, value: Value) -> Result<(), EnvError> {
        debug!(variable = name, "binding variable");
        self.variables.insert(name.to_string(), value);
        Ok(())
    }
}
