//! Shell emitter
//!
//! Writes an [`Environment`] as shell source for the parent shell to `eval`:
//!
//! ```text
//! _dev_name=shop
//! _dev_up=(
//!   ruby
//!   bundler
//! )
//! _dev_dependencies=(
//!   [ruby]='unset _dev_up_value; local _dev_up_value=3.2.2'
//!   [bundler]='unset _dev_up_value'
//! )
//! _dev_commands=(
//!   [test]='rake test "$@"'
//! )
//! ```

use std::io::{self, Write};

use super::program::{assign, expand_script};
use super::quote;
use crate::domain::Environment;

pub const NAME_VAR: &str = "_dev_name";
pub const UP_VAR: &str = "_dev_up";
pub const DEPENDENCIES_VAR: &str = "_dev_dependencies";
pub const COMMANDS_VAR: &str = "_dev_commands";

/// What happened during emission, besides the output itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Commands skipped because they have no script
    pub missing_commands: Vec<String>,
}

/// Emits shell assignments to a sink
pub struct ShellEmitter<W: Write> {
    out: W,
}

impl<W: Write> ShellEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the four variable blocks in their fixed order
    pub fn emit(&mut self, env: &Environment) -> io::Result<EmitReport> {
        let mut report = EmitReport::default();

        self.put_scalar(NAME_VAR, &env.name)?;

        self.put_array(UP_VAR, env.dependency_keys().map(quote))?;

        self.put_array(
            DEPENDENCIES_VAR,
            env.dependencies
                .iter()
                .map(|d| element(&d.key, assign(&d.value))),
        )?;

        let commands: Vec<String> = env
            .commands
            .iter()
            .filter_map(|command| match &command.script {
                Some(script) => Some(element(&command.name, expand_script(script))),
                None => {
                    report.missing_commands.push(command.name.clone());
                    None
                }
            })
            .collect();
        self.put_array(COMMANDS_VAR, commands)?;

        Ok(report)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn put_scalar(&mut self, name: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "{}={}", name, quote(value))
    }

    /// Writes `name=(`, one indented line per element, and `)`
    fn put_array<I>(&mut self, name: &str, elements: I) -> io::Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        writeln!(self.out, "{}=(", name)?;
        for element in elements {
            writeln!(self.out, "  {}", element)?;
        }
        writeln!(self.out, ")")
    }
}

/// Formats an associative element whose value is already a shell word
fn element(key: &str, word: String) -> String {
    format!("[{}]={}", quote(key), word)
}

/// Renders an environment into a string
pub fn render(env: &Environment) -> io::Result<(String, EmitReport)> {
    let mut emitter = ShellEmitter::new(Vec::new());
    let report = emitter.emit(env)?;
    let text = String::from_utf8(emitter.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok((text, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommandEntry, DependencyEntry, DependencyValue};

    fn sample() -> Environment {
        Environment {
            name: "my shop".to_string(),
            dependencies: vec![
                DependencyEntry::new("homebrew", DependencyValue::Null),
                DependencyEntry::new("ruby", DependencyValue::Scalar("3.2.2".to_string())),
                DependencyEntry::new(
                    "node",
                    DependencyValue::List(vec!["18".to_string(), "20".to_string()]),
                ),
            ],
            commands: vec![
                CommandEntry::new("test", Some("rake test".to_string())),
                CommandEntry::new("broken", None),
                CommandEntry::new("server", Some("bin/setup\nbin/rails s\n".to_string())),
            ],
        }
    }

    #[test]
    fn emits_blocks_in_order() {
        let (text, _) = render(&sample()).unwrap();
        let expected = "\
_dev_name='my shop'
_dev_up=(
  homebrew
  ruby
  node
)
_dev_dependencies=(
  [homebrew]='unset _dev_up_value'
  [ruby]='unset _dev_up_value; local _dev_up_value=3.2.2'
  [node]='unset _dev_up_value; local -a _dev_up_value=( 18 20 )'
)
_dev_commands=(
  [test]='rake test \"$@\"'
  [server]='bin/setup
bin/rails s
'
)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn missing_commands_are_reported_not_emitted() {
        let (text, report) = render(&sample()).unwrap();
        assert_eq!(report.missing_commands, vec!["broken".to_string()]);
        assert!(!text.contains("broken"));
    }

    #[test]
    fn empty_environment_still_emits_every_block() {
        let env = Environment {
            name: "x".to_string(),
            dependencies: vec![],
            commands: vec![],
        };
        let (text, report) = render(&env).unwrap();
        assert_eq!(
            text,
            "_dev_name=x\n_dev_up=(\n)\n_dev_dependencies=(\n)\n_dev_commands=(\n)\n"
        );
        assert!(report.missing_commands.is_empty());
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&sample()).unwrap(), render(&sample()).unwrap());
    }

    #[test]
    fn write_failures_propagate() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = ShellEmitter::new(Broken).emit(&sample()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
