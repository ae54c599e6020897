//! Options accepted by tool generation passes

use serde_json::Value as JsonValue;

use crate::error::ToolError;

/// Options passed to [`Tool::generate`](crate::Tool::generate).
///
/// One recognized field; everything else an orchestrator might put in its
/// options bag is rejected by [`GenerateOptions::from_map`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Skip self-registration and only declare the dependency closure.
    pub deps_only: bool,
}

impl GenerateOptions {
    /// Default options: self-registration enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a loosely typed options bag from the orchestrator.
    ///
    /// Only `depsOnly` is recognized, read by truthiness (`false`, `0`,
    /// `""`, `null`, `[]`, and `{}` are falsy). Any other key fails with
    /// [`ToolError::UnknownOption`].
    pub fn from_map(map: &serde_json::Map<String, JsonValue>) -> Result<Self, ToolError> {
        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "depsOnly" => options.deps_only = json_truthy(value),
                other => {
                    return Err(ToolError::UnknownOption { name: other.to_string() });
                }
            }
        }
        Ok(options)
    }
}

fn json_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: JsonValue) -> Result<GenerateOptions, ToolError> {
        GenerateOptions::from_map(value.as_object().unwrap())
    }

    #[test]
    fn test_default_is_full_generation() {
        assert!(!GenerateOptions::new().deps_only);
        assert!(!GenerateOptions::default().deps_only);
    }

    #[test]
    fn test_from_map_empty_bag() {
        let options = parse(json!({})).unwrap();
        assert!(!options.deps_only);
    }

    #[test]
    fn test_from_map_truthy_values() {
        for value in [json!(true), json!(1), json!("yes"), json!(["x"])] {
            let options = parse(json!({ "depsOnly": value.clone() })).unwrap();
            assert!(options.deps_only, "expected truthy: {value}");
        }
    }

    #[test]
    fn test_from_map_falsy_values() {
        for value in [json!(false), json!(0), json!(""), json!(null), json!([])] {
            let options = parse(json!({ "depsOnly": value.clone() })).unwrap();
            assert!(!options.deps_only, "expected falsy: {value}");
        }
    }

    #[test]
    fn test_from_map_rejects_unknown_keys() {
        let err = parse(json!({ "depsonly": true })).unwrap_err();
        assert!(matches!(err, ToolError::UnknownOption { ref name } if name == "depsonly"));
    }
}
