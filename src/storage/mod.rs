//! # Storage Layer
//!
//! Reads the environment document from disk.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Environment | YAML | Path given on the command line, usually `dev.yml` |
//!
//! The loader never writes. A document that can't be read, parsed or
//! normalized is reported as a [`DocumentError`] before any output exists.

mod document;

pub use document::{fallback_name, load, parse, DocumentError};
