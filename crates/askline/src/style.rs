//! Semantic text styling for prompt output
//!
//! Five pure helpers, one style each:
//! - [`success`] => green - affirmative outcomes
//! - [`warning`] => yellow - cautions
//! - [`error`] => red - failures
//! - [`bad_input`] => bold - emphasis on a rejected value
//! - [`stress`] => italic - emphasis on a constraint bound
//!
//! Each takes any printable value and returns a `String`. The `console`
//! crate resolves the styles to escape sequences on a capable terminal and
//! to plain text everywhere else, so callers never branch on terminal
//! capability themselves.

use std::fmt::Display;

use console::style;

/// Wrap a message in the success (green) style.
pub fn success(message: impl Display) -> String {
    style(message).green().to_string()
}

/// Wrap a message in the warning (yellow) style.
pub fn warning(message: impl Display) -> String {
    style(message).yellow().to_string()
}

/// Wrap a message in the error (red) style.
pub fn error(message: impl Display) -> String {
    style(message).red().to_string()
}

/// Emphasize a rejected input value (bold).
pub fn bad_input(value: impl Display) -> String {
    style(value).bold().to_string()
}

/// Emphasize a constraint bound (italic).
pub fn stress(value: impl Display) -> String {
    style(value).italic().to_string()
}
