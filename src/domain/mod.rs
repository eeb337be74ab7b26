//! Domain models for dev-env
//!
//! Contains the normalized environment model without any I/O concerns.

mod command;
mod dependency;
mod environment;
mod value;

use thiserror::Error;

pub use command::CommandEntry;
pub use dependency::DependencyEntry;
pub use environment::Environment;
pub use value::DependencyValue;

/// Document shapes the normalizer refuses to guess about
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("Invalid '{field}': expected {expected}, found {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid dependency at up[{index}]: {cause}")]
    InvalidDependency {
        index: usize,
        cause: Box<NormalizeError>,
    },

    #[error("Invalid command '{name}': {cause}")]
    InvalidCommand {
        name: String,
        cause: Box<NormalizeError>,
    },

    #[error("Empty {what} is not allowed")]
    EmptyKey { what: String },

    #[error("Expected {what}, found {found}")]
    UnexpectedShape { what: String, found: &'static str },
}
