//! Error type for prompt operations.

use thiserror::Error;

/// Errors a prompt can return.
///
/// Validation failures are not errors: a prompt keeps asking until it gets an
/// acceptable answer. `AskError` covers the cases where asking again cannot
/// help, a misconfigured prompt or a terminal that stopped cooperating.
#[derive(Error, Debug)]
pub enum AskError {
    /// A date format contains a directive outside the supported set.
    #[error("unsupported directive in date format `{0}`: only `%d`, `%b`, `%m`, `%y`, `%Y` are supported")]
    UnsupportedDirective(String),

    /// A choice prompt was configured with a default that is not among its
    /// options.
    #[error("default `{0}` is not one of the options")]
    UnknownDefault(String),

    /// A choice prompt was built with no options at all.
    #[error("choice prompt requires at least one option")]
    NoOptions,

    /// Reading from or writing to the terminal failed. Includes reaching end
    /// of input while a prompt was still waiting for an answer.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
