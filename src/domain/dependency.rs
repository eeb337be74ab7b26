//! Dependency entries from the `up` list
//!
//! Each element of `up` is written in one of three shapes:
//!
//! | Shape | Example | Key | Value |
//! |-------|---------|-----|-------|
//! | Bare scalar | `- ruby` | `ruby` | null |
//! | One-entry map | `- ruby: 3.2` | `ruby` | `3.2` |
//! | Explicit pair | `- [ruby, 3.2]` | `ruby` | `3.2` |
//!
//! All of them collapse into a [`DependencyEntry`].

use serde::Serialize;
use serde_yaml::Value;

use super::value::{key_text, shape_name};
use super::{DependencyValue, NormalizeError};

/// One setup step, in application order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub key: String,
    pub value: DependencyValue,
}

impl DependencyEntry {
    pub fn new(key: impl Into<String>, value: DependencyValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Normalizes a single `up` element
    pub fn from_yaml(element: &Value) -> Result<Self, NormalizeError> {
        match element {
            Value::Mapping(map) => {
                let mut entries = map.iter();
                match (entries.next(), entries.next()) {
                    (Some((key, value)), None) => Ok(Self::new(
                        key_text(key, "dependency key")?,
                        DependencyValue::from_yaml(value)?,
                    )),
                    _ => Err(NormalizeError::UnexpectedShape {
                        what: format!("one-entry map (got {} entries)", map.len()),
                        found: "map",
                    }),
                }
            }
            Value::Sequence(pair) => match pair.as_slice() {
                [key] => Ok(Self::new(key_text(key, "dependency key")?, DependencyValue::Null)),
                [key, value] => Ok(Self::new(
                    key_text(key, "dependency key")?,
                    DependencyValue::from_yaml(value)?,
                )),
                _ => Err(NormalizeError::UnexpectedShape {
                    what: format!("key-value pair (got {} elements)", pair.len()),
                    found: "list",
                }),
            },
            Value::Null | Value::Tagged(_) => Err(NormalizeError::UnexpectedShape {
                what: "dependency".to_string(),
                found: shape_name(element),
            }),
            scalar => Ok(Self::new(
                key_text(scalar, "dependency key")?,
                DependencyValue::Null,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(s: &str) -> Result<DependencyEntry, NormalizeError> {
        DependencyEntry::from_yaml(&serde_yaml::from_str(s).unwrap())
    }

    #[test]
    fn bare_scalar_has_no_value() {
        assert_eq!(
            entry("homebrew").unwrap(),
            DependencyEntry::new("homebrew", DependencyValue::Null)
        );
    }

    #[test]
    fn one_entry_map_splits_into_key_and_value() {
        assert_eq!(
            entry("{ruby: 3.2.2}").unwrap(),
            DependencyEntry::new("ruby", DependencyValue::Scalar("3.2.2".to_string()))
        );
    }

    #[test]
    fn explicit_pair_splits_into_key_and_value() {
        assert_eq!(
            entry("[node, [20, 22]]").unwrap(),
            DependencyEntry::new(
                "node",
                DependencyValue::List(vec!["20".to_string(), "22".to_string()])
            )
        );
    }

    #[test]
    fn single_element_list_is_positional() {
        assert_eq!(
            entry("[bundler]").unwrap(),
            DependencyEntry::new("bundler", DependencyValue::Null)
        );
    }

    #[test]
    fn numeric_keys_are_rendered_as_text() {
        assert_eq!(entry("7").unwrap().key, "7");
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        assert!(entry("{}").is_err());
        assert!(entry("{a: 1, b: 2}").is_err());
        assert!(entry("[]").is_err());
        assert!(entry("[a, b, c]").is_err());
        assert!(entry("~").is_err());
        assert!(entry("[[a], b]").is_err());
    }

    #[test]
    fn empty_keys_are_rejected() {
        for yaml in ["''", "{'': 1}", "['', 1]", "['']"] {
            let err = entry(yaml).unwrap_err();
            assert!(err.to_string().contains("Empty dependency key"), "{}", yaml);
        }
    }
}
