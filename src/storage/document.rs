//! Document loading
//!
//! Reads a `dev.yml` file, parses it and hands it to the normalizer. The
//! document is read once; nothing is written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

use crate::domain::{Environment, NormalizeError};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration in {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: NormalizeError,
    },
}

/// Loads and normalizes the document at `path`
pub fn load(path: &Path) -> Result<Environment, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content, path)
}

/// Parses and normalizes document text that was read from `path`
pub fn parse(content: &str, path: &Path) -> Result<Environment, DocumentError> {
    let document: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(content).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };

    Environment::normalize(&document, &fallback_name(path)).map_err(|source| {
        DocumentError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Name of the directory containing the document
///
/// `/home/user/myproj/dev.yml` gives `myproj`. Relative paths such as
/// `dev.yml` or `../dev.yml` are resolved against the filesystem when the
/// last component isn't a plain name.
pub fn fallback_name(path: &Path) -> String {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if let Some(name) = dir.file_name() {
        return name.to_string_lossy().into_owned();
    }

    fs::canonicalize(dir)
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.display().to_string())
}
