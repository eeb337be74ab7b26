//! Value programs and command scripts
//!
//! A value program is a small shell snippet that binds the scratch slot to
//! a dependency's value with the right shell type. The consuming shell
//! evaluates it inside a function, once per dependency, so the slot is
//! always unset first and a previous binding's type never leaks into the
//! next one.

use super::quote;
use crate::domain::DependencyValue;

/// Scratch variable shared by every value program
pub const VALUE_SLOT: &str = "_dev_up_value";

/// Builds the quoted value program for a dependency value
pub fn assign(value: &DependencyValue) -> String {
    quote(&value_program(value))
}

/// Builds the (unquoted) value program for a dependency value
pub fn value_program(value: &DependencyValue) -> String {
    let unset = format!("unset {}", VALUE_SLOT);

    let assignment = match value {
        DependencyValue::Null => return unset,
        DependencyValue::Scalar(s) => format!("local {}={}", VALUE_SLOT, quote(s)),
        DependencyValue::List(items) => {
            let items: Vec<String> = items.iter().map(|item| quote(item)).collect();
            format!("local -a {}=( {} )", VALUE_SLOT, items.join(" "))
        }
        DependencyValue::Map(pairs) => {
            let pairs: Vec<String> = pairs.iter().map(|(k, v)| association(k, v)).collect();
            format!("local -A {}=( {} )", VALUE_SLOT, pairs.join(" "))
        }
    };

    format!("{}; {}", unset, assignment)
}

/// Formats one `[key]=value` element of an associative array
pub fn association(key: &str, value: &str) -> String {
    format!("[{}]={}", quote(key), quote(value))
}

/// Expands and quotes a command script
///
/// A single-line script that doesn't already forward its arguments gets
/// `"$@"` appended, so `dev <command> extra args` reaches the underlying
/// program. Multi-line scripts are function bodies and are left alone.
pub fn expand_script(script: &str) -> String {
    quote(&expanded(script))
}

fn expanded(script: &str) -> String {
    let line = script.trim_end_matches(&['\n', '\r'][..]);

    let single_line = !line.trim().is_empty() && !line.contains('\n');
    let forwards_args = script.contains("$@") || script.contains("$*");

    if single_line && !forwards_args {
        format!("{} \"$@\"", line)
    } else {
        script.to_string()
    }
}
