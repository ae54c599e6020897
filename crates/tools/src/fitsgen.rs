//! Dependency declarations for the fitsGen applications library

use fitsgen_env::{Environment, Value};
use tracing::debug;

use crate::error::ToolError;
use crate::options::GenerateOptions;
use crate::tool::Tool;

/// Library target registered by [`FitsGenApps`].
pub const LIBRARY: &str = "fitsGen";

/// Dependency tools requested on every generation pass, in order.
pub const DEPENDENCIES: [&str; 6] = [
    "facilitiesLib",
    "tipLib",
    "astroLib",
    "dataSubselectorLib",
    "embed_pythonLib",
    "evtUtilsLib",
];

/// Environment variable naming the platform GUI libraries.
pub const ROOT_GUI_LIBS: &str = "rootGuiLibs";

/// Declarator for the fitsGen applications library.
///
/// Registers `fitsGen` as a build target (unless `deps_only`), requests the
/// fixed dependency tool chain in declaration order, and registers the GUI
/// libraries bound to `rootGuiLibs` in the environment. Always reports
/// itself as available.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitsGenApps;

impl Tool for FitsGenApps {
    fn name(&self) -> &str {
        "fitsGenAppsLib"
    }

    fn generate(
        &self,
        env: &mut dyn Environment,
        options: &GenerateOptions,
    ) -> Result<(), ToolError> {
        if !options.deps_only {
            env.register_library(Value::from(LIBRARY))?;
        }

        for dep in DEPENDENCIES {
            env.apply_tool(dep)?;
        }

        // The variable's value is registered as bound, uninspected.
        let gui_libs = env.get_variable(ROOT_GUI_LIBS)?.clone();
        env.register_library(gui_libs)?;

        debug!(deps_only = options.deps_only, "declared fitsGen dependencies");
        Ok(())
    }
}
