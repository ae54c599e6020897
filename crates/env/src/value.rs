//! Variant values held in an environment's variable store

use serde::{Deserialize, Serialize};

/// A value bound to an environment variable or passed to library
/// registration.
///
/// The orchestrator treats variables loosely; this enum covers the shapes
/// declaration tools actually exchange: scalars and lists of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    /// Loose truthiness matching the orchestrator's option handling:
    /// `false`, `0`, `""`, and `[]` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
        }
    }

    /// Borrow the string form, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the list form, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(names: Vec<String>) -> Self {
        Value::List(names.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(names: Vec<&str>) -> Self {
        Value::List(names.into_iter().map(Value::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(1).is_truthy());
        assert!(Value::from("guiA").is_truthy());
        assert!(Value::from(vec!["guiA"]).is_truthy());

        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
    }

    #[test]
    fn test_accessors() {
        let name = Value::from("fitsGen");
        assert_eq!(name.as_str(), Some("fitsGen"));
        assert!(name.as_list().is_none());

        let list = Value::from(vec!["guiA", "guiB"]);
        assert!(list.as_str().is_none());
        assert_eq!(list.as_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_serde_roundtrip() {
        let value = Value::from(vec!["guiA", "guiB"]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"["guiA","guiB"]"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
