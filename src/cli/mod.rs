//! # Command-Line Interface
//!
//! ```bash
//! eval "$(dev-env path/to/dev.yml)"
//! ```
//!
//! ## Output Formats
//!
//! The `--format` flag selects what goes to stdout:
//! - `shell` (default) - `_dev_*` variable assignments
//! - `json` - The normalized environment, for inspection
//!
//! Commands without a script are reported on stderr as
//! `missing command: <name>` in both formats.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and emit the environment.

mod app;
mod output;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
