//! Shell quoting
//!
//! Every piece of data that ends up in emitted shell text goes through
//! [`quote`]. A POSIX shell parses the result back as exactly one word with
//! the original contents: no splitting, globbing or expansion.

/// Characters that never need quoting
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '+' | '/' | '%')
}

/// Quotes a string as a single shell word
///
/// - Empty strings become `''`
/// - Strings made only of safe characters are left bare
/// - Everything else is wrapped in single quotes, with each embedded `'`
///   written as `'\''`
pub fn quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    if value.chars().all(is_safe) {
        return value.to_string();
    }

    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Parses one shell word back into its literal value
///
/// Only understands the constructs [`quote`] produces: bare characters,
/// single-quoted runs and backslash escapes.
#[cfg(test)]
pub(crate) fn unquote(word: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = word.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => loop {
                match chars.next()? {
                    '\'' => break,
                    c => out.push(c),
                }
            },
            '\\' => out.push(chars.next()?),
            c if is_safe(c) => out.push(c),
            _ => return None,
        }
    }

    Some(out)
}
