//! POSIX shell quoting for display strings.

/// Quotes `arg` so a POSIX shell would read it back as one word.
///
/// Words made only of `[A-Za-z0-9@%+=:,./_-]` are returned unchanged; anything
/// else is wrapped in single quotes, with embedded single quotes spliced in as
/// `'"'"'`.
#[must_use]
pub fn shell_quote(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    if arg.chars().all(is_safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r#"'"'"'"#))
}

/// Joins an argument vector into a single shell-readable command line.
#[must_use]
pub fn join<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter().map(|a| shell_quote(a.as_ref())).collect::<Vec<_>>().join(" ")
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c)
}
