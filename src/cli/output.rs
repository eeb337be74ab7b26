//! Output handling for the CLI
//!
//! Standard output carries only the rendered environment, so it stays safe
//! to `eval`. Everything else (diagnostics, verbose lines, errors) goes to
//! standard error.

use std::io::{self, Write};

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Shell assignments for `eval`
    #[default]
    Shell,
    /// The normalized environment as JSON
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Writes the rendered document to stdout in one piece
    pub fn document(&self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Serializes structured data for the JSON format
    pub fn json<T: Serialize>(&self, data: &T) -> serde_json::Result<String> {
        serde_json::to_string_pretty(data).map(|mut json| {
            json.push('\n');
            json
        })
    }

    /// Prints a diagnostic that doesn't affect the exit status
    pub fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
