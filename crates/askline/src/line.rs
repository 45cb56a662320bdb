//! Line-oriented prompts: typed values and free text.
//!
//! All line prompts share one retry engine. Each round reads a line, trims
//! it, and branches:
//!
//! 1. empty line, default set: return the default. No validation runs, a
//!    default is trusted as supplied.
//! 2. empty line, no default: invalid-input notice, ask again.
//! 3. line does not parse: invalid-input notice echoing the line, ask again.
//! 4. parses but violates the bounds: range complaint, ask again.
//! 5. otherwise: return the parsed value.
//!
//! The loop is unbounded; it ends only on a returned value or a terminal
//! error. Dropping input entirely (closed stdin) surfaces as
//! [`AskError::Io`] rather than spinning on step 2.

use std::fmt;
use std::str::FromStr;

use crate::console::{Console, TermConsole};
use crate::error::AskError;
use crate::validate::{invalid_input, Bounds, Subject};

/// Render the common prompt line: text, bracketed default when present, then
/// the delimiter.
pub(crate) fn render_prompt(
    text: &str,
    default: Option<impl fmt::Display>,
    delimiter: &str,
) -> String {
    match default {
        Some(default) => format!("{text} [{default}]{delimiter}"),
        None => format!("{text}{delimiter}"),
    }
}

/// The shared retry engine. `parse` sees only non-empty trimmed lines;
/// `check` sees only parsed values.
pub(crate) fn read_loop<T>(
    console: &mut dyn Console,
    rendered: &str,
    mut default: Option<T>,
    parse: impl Fn(&str) -> Option<T>,
    check: impl Fn(&T) -> Result<(), String>,
) -> Result<T, AskError> {
    loop {
        let line = console.prompt_line(rendered)?;
        let raw = line.trim();

        if raw.is_empty() {
            if let Some(value) = default.take() {
                return Ok(value);
            }
            console.notice(&invalid_input(None));
            continue;
        }

        match parse(raw) {
            Some(value) => match check(&value) {
                Ok(()) => return Ok(value),
                Err(complaint) => console.notice(&complaint),
            },
            None => console.notice(&invalid_input(Some(raw))),
        }
    }
}

/// Prompt for a single parseable value with optional inclusive bounds.
///
/// `T` is any type that parses from a string and orders against its bounds;
/// the [`IntPrompt`] and [`FloatPrompt`] aliases cover the common cases.
///
/// ```no_run
/// use askline::IntPrompt;
///
/// let picked = IntPrompt::new("Enter number between 1 and 5")
///     .default(3)
///     .min(1)
///     .max(5)
///     .ask()?;
/// println!("you picked {picked}");
/// # Ok::<(), askline::AskError>(())
/// ```
pub struct ValuePrompt<T> {
    text: String,
    default: Option<T>,
    delimiter: String,
    bounds: Bounds<T>,
}

/// [`ValuePrompt`] over `i64`.
pub type IntPrompt = ValuePrompt<i64>;

/// [`ValuePrompt`] over `f64`.
pub type FloatPrompt = ValuePrompt<f64>;

impl<T: FromStr + PartialOrd + fmt::Display> ValuePrompt<T> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
            delimiter: ": ".to_string(),
            bounds: Bounds::default(),
        }
    }

    /// Value returned when the user answers with an empty line.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Text between the prompt and the cursor, `": "` unless changed.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Smallest acceptable value, inclusive.
    pub fn min(mut self, min: T) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Largest acceptable value, inclusive.
    pub fn max(mut self, max: T) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Ask on the process terminal.
    pub fn ask(self) -> Result<T, AskError> {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    ///
    /// # Errors
    ///
    /// Only terminal failures surface here; bad input is re-prompted, never
    /// returned.
    pub fn ask_on(self, console: &mut dyn Console) -> Result<T, AskError> {
        let rendered = render_prompt(&self.text, self.default.as_ref(), &self.delimiter);
        let ValuePrompt { default, bounds, .. } = self;
        read_loop(
            console,
            &rendered,
            default,
            |raw| raw.parse().ok(),
            |value| bounds.check(value, Subject::Value),
        )
    }
}

/// Prompt for one line of free text.
///
/// An empty answer is "no input" (default or re-prompt), never a valid empty
/// string. Bounds are inclusive limits on the character count.
pub struct TextPrompt {
    text: String,
    default: Option<String>,
    delimiter: String,
    bounds: Bounds<usize>,
}

impl TextPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
            delimiter: ": ".to_string(),
            bounds: Bounds::default(),
        }
    }

    /// Text returned when the user answers with an empty line.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Text between the prompt and the cursor, `": "` unless changed.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Shortest acceptable answer in characters, inclusive.
    pub fn min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Longest acceptable answer in characters, inclusive.
    pub fn max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Ask on the process terminal.
    pub fn ask(self) -> Result<String, AskError> {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    pub fn ask_on(self, console: &mut dyn Console) -> Result<String, AskError> {
        let rendered = render_prompt(&self.text, self.default.as_ref(), &self.delimiter);
        let TextPrompt { default, bounds, .. } = self;
        read_loop(
            console,
            &rendered,
            default,
            |raw| Some(raw.to_string()),
            |value| bounds.check(&value.chars().count(), Subject::Length),
        )
    }
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;

    use super::*;
    use crate::console::mock::ScriptedConsole;

    fn plain(message: &str) -> String {
        strip_ansi_codes(message).to_string()
    }

    #[test]
    fn test_empty_line_returns_default() {
        let mut console = ScriptedConsole::new().with_lines(&[""]);
        let value = IntPrompt::new("Enter number between 1 and 5")
            .default(3)
            .min(1)
            .max(5)
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(value, 3);
        assert!(console.notices.is_empty());
    }

    #[test]
    fn test_default_bypasses_bounds() {
        let mut console = ScriptedConsole::new().with_lines(&[""]);
        let value = IntPrompt::new("n")
            .default(9)
            .min(1)
            .max(5)
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(value, 9);
        assert!(console.notices.is_empty());
    }

    #[test]
    fn test_out_of_range_then_accepted() {
        let mut console = ScriptedConsole::new().with_lines(&["7", "4"]);
        let value = IntPrompt::new("n")
            .default(3)
            .min(1)
            .max(5)
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(value, 4);
        assert_eq!(console.prompts.len(), 2);
        assert_eq!(plain(&console.notices[0]), "Expected value between 1 and 5");
    }

    #[test]
    fn test_unparseable_line_echoed() {
        let mut console = ScriptedConsole::new().with_lines(&["abc", "2"]);
        let value = IntPrompt::new("n").ask_on(&mut console).unwrap();
        assert_eq!(value, 2);
        assert_eq!(plain(&console.notices[0]), "Invalid input: abc");
    }

    #[test]
    fn test_empty_without_default_reprompts() {
        let mut console = ScriptedConsole::new().with_lines(&["", "5"]);
        let value = IntPrompt::new("n").ask_on(&mut console).unwrap();
        assert_eq!(value, 5);
        assert_eq!(plain(&console.notices[0]), "Invalid input");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let mut console = ScriptedConsole::new().with_lines(&["  42  "]);
        let value = IntPrompt::new("n").ask_on(&mut console).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_render_with_default_and_delimiter() {
        let mut console = ScriptedConsole::new().with_lines(&["2"]);
        IntPrompt::new("Enter number between 1 and 5")
            .default(3)
            .delimiter(" -> ")
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(console.prompts[0], "Enter number between 1 and 5 [3] -> ");
    }

    #[test]
    fn test_render_without_default() {
        let mut console = ScriptedConsole::new().with_lines(&["0.5"]);
        FloatPrompt::new("Enter decimal").ask_on(&mut console).unwrap();
        assert_eq!(console.prompts[0], "Enter decimal: ");
    }

    #[test]
    fn test_float_bounds_inclusive() {
        let mut console = ScriptedConsole::new().with_lines(&["1.5", "1.0"]);
        let value = FloatPrompt::new("n")
            .min(0.0)
            .max(1.0)
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(value, 1.0);
        assert_eq!(plain(&console.notices[0]), "Expected value between 0 and 1");
    }

    #[test]
    fn test_text_length_bounds() {
        let mut console = ScriptedConsole::new().with_lines(&["toolongtext", "short"]);
        let value = TextPrompt::new("s")
            .min(1)
            .max(6)
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(value, "short");
        assert_eq!(plain(&console.notices[0]), "Expected length between 1 and 6");
    }

    #[test]
    fn test_text_length_counts_characters_not_bytes() {
        let mut console = ScriptedConsole::new().with_lines(&["héllo"]);
        let value = TextPrompt::new("s").max(5).ask_on(&mut console).unwrap();
        assert_eq!(value, "héllo");
        assert!(console.notices.is_empty());
    }

    #[test]
    fn test_text_empty_uses_default() {
        let mut console = ScriptedConsole::new().with_lines(&[""]);
        let value = TextPrompt::new("s")
            .default("fallback")
            .ask_on(&mut console)
            .unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_closed_input_surfaces_as_error() {
        let mut console = ScriptedConsole::new();
        let err = IntPrompt::new("n").ask_on(&mut console).unwrap_err();
        assert!(matches!(
            err,
            AskError::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof
        ));
    }
}
