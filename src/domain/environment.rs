//! The normalized development environment
//!
//! [`Environment::normalize`] turns the raw document into a plain record in
//! one pass: defaults are applied, `up` is canonicalized and `commands` is
//! flattened, all in document order.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::value::{key_text, scalar_text, shape_name};
use super::{CommandEntry, DependencyEntry, NormalizeError};

/// Everything the shell emitter needs, derived once from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Project name, falling back to the document's directory name
    pub name: String,

    /// Dependencies in application order
    pub dependencies: Vec<DependencyEntry>,

    /// Commands in document order, including ones with a missing script
    pub commands: Vec<CommandEntry>,
}

impl Environment {
    /// Normalizes a parsed document
    ///
    /// `fallback_name` is used when the document has no usable `name`.
    /// An empty document (`null`) is accepted and yields an environment
    /// with no dependencies and no commands.
    pub fn normalize(document: &Value, fallback_name: &str) -> Result<Self, NormalizeError> {
        let empty = Mapping::new();
        let root = match document {
            Value::Null => &empty,
            Value::Mapping(map) => map,
            other => {
                return Err(NormalizeError::InvalidField {
                    field: "document",
                    expected: "map",
                    found: shape_name(other),
                })
            }
        };

        Ok(Self {
            name: resolve_name(root.get("name"), fallback_name)?,
            dependencies: normalize_up(root.get("up"))?,
            commands: normalize_commands(root.get("commands"))?,
        })
    }

    /// Dependency keys in application order
    pub fn dependency_keys(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(|d| d.key.as_str())
    }

    /// Commands that have no script to run
    pub fn missing_commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.commands.iter().filter(|c| c.is_missing())
    }
}

fn resolve_name(name: Option<&Value>, fallback: &str) -> Result<String, NormalizeError> {
    let name = match name {
        None | Some(Value::Null) => None,
        Some(value) => Some(scalar_text(value, "name").map_err(|_| {
            NormalizeError::InvalidField {
                field: "name",
                expected: "string",
                found: shape_name(value),
            }
        })?),
    };

    Ok(name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| fallback.to_string()))
}

fn normalize_up(up: Option<&Value>) -> Result<Vec<DependencyEntry>, NormalizeError> {
    match up {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(elements)) => elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                DependencyEntry::from_yaml(element).map_err(|cause| {
                    NormalizeError::InvalidDependency {
                        index,
                        cause: Box::new(cause),
                    }
                })
            })
            .collect(),
        Some(other) => Err(NormalizeError::InvalidField {
            field: "up",
            expected: "list",
            found: shape_name(other),
        }),
    }
}

fn normalize_commands(commands: Option<&Value>) -> Result<Vec<CommandEntry>, NormalizeError> {
    match commands {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Mapping(map)) => map
            .iter()
            .map(|(name, script)| {
                let name = key_text(name, "command name")?;
                CommandEntry::from_yaml(name.clone(), script).map_err(|cause| {
                    NormalizeError::InvalidCommand {
                        name,
                        cause: Box::new(cause),
                    }
                })
            })
            .collect(),
        Some(other) => Err(NormalizeError::InvalidField {
            field: "commands",
            expected: "map",
            found: shape_name(other),
        }),
    }
}
