//! Color decision from environment variables and TTY status

use std::io::IsTerminal;

/// Decide whether to style output.
///
/// `var` looks up an environment variable. Precedence: `NO_COLOR`, then
/// `CLICOLOR_FORCE`, then `CLICOLOR=0`, then whether stdout is a TTY.
pub fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}

/// [`colors_enabled`] against the real process environment
pub fn should_use_colors() -> bool {
    colors_enabled(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}
