//! Command entries from the `commands` map
//!
//! A command is either written as a bare script string or as a map with a
//! `run` key:
//!
//! ```yaml
//! commands:
//!   test: bundle exec rake test
//!   server:
//!     desc: Start the app
//!     run: |
//!       bin/setup
//!       bin/rails server
//! ```

use serde::Serialize;
use serde_yaml::Value;

use super::NormalizeError;

/// A named, user-invocable script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    pub name: String,

    /// Script body, `None` when the entry has no usable script
    pub script: Option<String>,
}

impl CommandEntry {
    pub fn new(name: impl Into<String>, script: Option<String>) -> Self {
        Self {
            name: name.into(),
            script,
        }
    }

    /// Builds an entry from a raw `commands` value
    ///
    /// Anything that isn't a string or a map with a string `run` yields a
    /// missing script. Tagged values are configuration errors.
    pub fn from_yaml(name: impl Into<String>, value: &Value) -> Result<Self, NormalizeError> {
        let script = match value {
            Value::String(script) => Some(script.clone()),
            Value::Mapping(map) => match map.get("run") {
                Some(Value::String(script)) => Some(script.clone()),
                Some(Value::Tagged(_)) => return Err(tagged("run script")),
                _ => None,
            },
            Value::Tagged(_) => return Err(tagged("command script")),
            _ => None,
        };

        Ok(Self::new(name, script))
    }

    pub fn is_missing(&self) -> bool {
        self.script.is_none()
    }
}

fn tagged(what: &str) -> NormalizeError {
    NormalizeError::UnexpectedShape {
        what: what.to_string(),
        found: "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(s: &str) -> CommandEntry {
        CommandEntry::from_yaml("cmd", &serde_yaml::from_str(s).unwrap()).unwrap()
    }

    #[test]
    fn bare_string_is_the_script() {
        assert_eq!(command("echo hi").script.as_deref(), Some("echo hi"));
    }

    #[test]
    fn run_key_is_the_script() {
        assert_eq!(
            command("{desc: greet, run: echo hi}").script.as_deref(),
            Some("echo hi")
        );
    }

    #[test]
    fn missing_scripts() {
        assert!(command("{}").is_missing());
        assert!(command("{desc: nothing}").is_missing());
        assert!(command("{run: ~}").is_missing());
        assert!(command("~").is_missing());
        assert!(command("[echo, hi]").is_missing());
    }

    #[test]
    fn tagged_scripts_are_errors() {
        let err = CommandEntry::from_yaml("t", &serde_yaml::from_str("!foo echo").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("tagged value"));

        let err = CommandEntry::from_yaml("t", &serde_yaml::from_str("{run: !foo echo}").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("run script"));
    }
}
