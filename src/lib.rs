//! dev-env - Shell environment generation for `dev.yml`
//!
//! Reads a declarative development-environment document (project name,
//! `up` dependencies, `commands`) and writes shell assignments that a
//! parent shell can `eval` to configure a session.

pub mod domain;
pub mod storage;
pub mod shell;
pub mod cli;

pub use domain::{CommandEntry, DependencyEntry, DependencyValue, Environment};
