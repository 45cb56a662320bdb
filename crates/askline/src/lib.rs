//! askline: Validated interactive terminal prompts
//!
//! Typed line input, dates, collections, and menu-backed choices that keep
//! asking until the answer is acceptable. Bad input never reaches the
//! caller: every prompt re-asks on parse failures and constraint
//! violations, and an empty answer takes the prompt's default when one is
//! set.
//!
//! ```no_run
//! use askline::{ConfirmPrompt, IntPrompt};
//!
//! let count = IntPrompt::new("How many workers")
//!     .default(4)
//!     .min(1)
//!     .max(16)
//!     .ask()?;
//! if ConfirmPrompt::new("Start now?").default(true).ask()? {
//!     println!("starting {count} workers");
//! }
//! # Ok::<(), askline::AskError>(())
//! ```
//!
//! Every prompt also offers `ask_on` taking any [`Console`] implementation,
//! which is how the test suites drive whole conversations without a
//! terminal.

/// Error type for prompt operations
pub mod error;

/// Semantic text styling helpers
pub mod style;

/// Terminal collaborator trait and its production implementation
pub mod console;

/// Typed line prompts (integers, floats, free text)
pub mod line;

/// Date prompt over a restricted strftime vocabulary
pub mod date;

/// Collection prompts (lists, tuples, sets)
pub mod collect;

/// Menu-backed prompts (confirmation, single and multi choice)
pub mod menu;

mod validate;

// Re-exports for convenience
pub use collect::{CollectPrompt, Collection, ListPrompt, SetPrompt, TuplePrompt};
pub use console::{clear_screen, Console, TermConsole};
pub use date::DatePrompt;
pub use error::AskError;
pub use line::{FloatPrompt, IntPrompt, TextPrompt, ValuePrompt};
pub use menu::{ChoosePrompt, ConfirmPrompt, MultiChoosePrompt};
