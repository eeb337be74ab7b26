//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use crate::shell::render;
use crate::storage;

#[derive(Parser)]
#[command(name = "dev-env")]
#[command(author, version, about = "Translate a dev.yml into shell variables for eval")]
pub struct Cli {
    /// Path to the environment document (usually dev.yml)
    #[arg(env = "DEV_ENV_FILE")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, short = 'f', default_value = "shell")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose_ctx("load", &format!("Reading {}", cli.path.display()));
    let env = storage::load(&cli.path)?;
    output.verbose_ctx(
        "load",
        &format!(
            "name={}, {} dependencies, {} commands",
            env.name,
            env.dependencies.len(),
            env.commands.len()
        ),
    );

    let text = if output.is_json() {
        for command in env.missing_commands() {
            output.warn(&format!("missing command: {}", command.name));
        }
        output.json(&env).context("Failed to serialize environment")?
    } else {
        let (text, report) = render(&env).context("Failed to render shell output")?;
        for name in &report.missing_commands {
            output.warn(&format!("missing command: {}", name));
        }
        text
    };

    output
        .document(&text)
        .context("Failed to write shell output")?;

    output.verbose("Done");
    Ok(())
}
