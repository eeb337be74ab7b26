//! # Shell Emission
//!
//! Turns a normalized [`Environment`](crate::domain::Environment) into shell
//! source text for a parent shell to `eval`.
//!
//! ## Layers
//!
//! | Layer | Function | Produces |
//! |-------|----------|----------|
//! | Quoting | [`quote`] | One literal shell word |
//! | Values | [`assign`] | Quoted value program for a dependency |
//! | Scripts | [`expand_script`] | Quoted, argument-forwarding script |
//! | Blocks | [`ShellEmitter`] | The `_dev_*` variable blocks |
//!
//! All emitted data passes through [`quote`].

mod emitter;
mod program;
mod quote;

pub use emitter::{
    render, EmitReport, ShellEmitter, COMMANDS_VAR, DEPENDENCIES_VAR, NAME_VAR, UP_VAR,
};
pub use program::{assign, association, expand_script, value_program, VALUE_SLOT};
pub use quote::quote;
