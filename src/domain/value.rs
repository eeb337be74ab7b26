//! Dependency values
//!
//! A dependency in `up` carries an optional value that is exposed to the
//! shell through the scratch slot. YAML gives us four useful shapes; they
//! are captured here as an explicit variant instead of inspecting
//! `serde_yaml::Value` at emission time.

use serde::Serialize;
use serde_yaml::Value;

use super::NormalizeError;

/// Value attached to a dependency entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DependencyValue {
    /// No value, the dependency is purely positional
    Null,
    Scalar(String),
    List(Vec<String>),
    /// Key-value pairs in document order
    Map(Vec<(String, String)>),
}

impl DependencyValue {
    /// Converts a raw YAML value into a dependency value
    pub fn from_yaml(value: &Value) -> Result<Self, NormalizeError> {
        match value {
            Value::Null => Ok(DependencyValue::Null),
            Value::Sequence(items) => items
                .iter()
                .map(|item| element_text(item, "list element"))
                .collect::<Result<Vec<_>, _>>()
                .map(DependencyValue::List),
            Value::Mapping(map) => map
                .iter()
                .map(|(k, v)| Ok((key_text(k, "map key")?, element_text(v, "map value")?)))
                .collect::<Result<Vec<_>, _>>()
                .map(DependencyValue::Map),
            other => scalar_text(other, "value").map(DependencyValue::Scalar),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DependencyValue::Null)
    }
}

/// Renders a YAML scalar as text
///
/// Strings are taken verbatim, numbers and booleans use their YAML display
/// form. Anything else is rejected with `what` naming the position.
pub fn scalar_text(value: &Value, what: &str) -> Result<String, NormalizeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(NormalizeError::UnexpectedShape {
            what: what.to_string(),
            found: shape_name(other),
        }),
    }
}

/// Renders a scalar used as an array key or a command name
///
/// Bash refuses an empty associative subscript, so empty keys are rejected.
pub fn key_text(value: &Value, what: &str) -> Result<String, NormalizeError> {
    let key = scalar_text(value, what)?;
    if key.is_empty() {
        return Err(NormalizeError::EmptyKey {
            what: what.to_string(),
        });
    }
    Ok(key)
}

/// Like [`scalar_text`], but an explicit null becomes the empty string
fn element_text(value: &Value, what: &str) -> Result<String, NormalizeError> {
    match value {
        Value::Null => Ok(String::new()),
        other => scalar_text(other, what),
    }
}

/// Short human name for a YAML value's shape
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "map",
        Value::Tagged(_) => "tagged value",
    }
}
