//! Date prompt over a restricted strftime vocabulary.
//!
//! Format strings may use `%d`, `%b`, `%m`, `%y`, and `%Y` plus literal
//! text. The prompt shows a human-readable placeholder built from the format
//! (`%d/%m/%y` becomes `dd/mm/yy`) and parses answers back with the format
//! itself. A format holding any other directive is a caller mistake, not bad
//! user input, and fails the ask before anything is printed.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::console::{Console, TermConsole};
use crate::error::AskError;
use crate::line::TextPrompt;
use crate::validate::{invalid_input, Bounds, Subject};

/// Supported directives and their placeholder spellings, applied in order.
const DIRECTIVES: [(&str, &str); 5] = [
    ("%d", "dd"),
    ("%b", "MMM"),
    ("%m", "mm"),
    ("%y", "yy"),
    ("%Y", "YYYY"),
];

static SUPPORTED_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new("%[dbmyY]").unwrap());

/// Prompt for a calendar date entered in a fixed format.
///
/// Input length is held between the placeholder length minus two and the
/// placeholder length, which tolerates single-digit days and months without
/// admitting arbitrary text. An answer matching the displayed default
/// verbatim returns the original default date without re-parsing it.
pub struct DatePrompt {
    text: String,
    default: Option<NaiveDate>,
    delimiter: String,
    format: String,
    bounds: Bounds<NaiveDate>,
}

impl DatePrompt {
    /// New prompt using the `%d/%m/%y` format.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
            delimiter: ": ".to_string(),
            format: "%d/%m/%y".to_string(),
            bounds: Bounds::default(),
        }
    }

    /// Date returned when the user accepts the displayed default.
    pub fn default(mut self, value: NaiveDate) -> Self {
        self.default = Some(value);
        self
    }

    /// Text between the prompt and the cursor, `": "` unless changed.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Entry format. Only the directives named in the module docs are
    /// understood; anything else fails the ask with
    /// [`AskError::UnsupportedDirective`].
    ///
    /// The whitelist is the only call-time check. A format that omits the
    /// day, month, or year (such as `"%d/%m"`) is accepted here but can
    /// never complete a date, so that prompt rejects every answer and asks
    /// forever.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Earliest acceptable date, inclusive.
    pub fn after(mut self, after: NaiveDate) -> Self {
        self.bounds.min = Some(after);
        self
    }

    /// Latest acceptable date, inclusive.
    pub fn before(mut self, before: NaiveDate) -> Self {
        self.bounds.max = Some(before);
        self
    }

    /// Ask on the process terminal.
    pub fn ask(self) -> Result<NaiveDate, AskError> {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    ///
    /// # Errors
    ///
    /// [`AskError::UnsupportedDirective`] if the format strays outside the
    /// supported set; otherwise only terminal failures.
    pub fn ask_on(self, console: &mut dyn Console) -> Result<NaiveDate, AskError> {
        if SUPPORTED_DIRECTIVE.replace_all(&self.format, "").contains('%') {
            return Err(AskError::UnsupportedDirective(self.format));
        }

        let placeholder = DIRECTIVES
            .iter()
            .fold(self.format.clone(), |format, (directive, shown)| {
                format.replace(directive, shown)
            });
        let formatted_default = self
            .default
            .map(|default| default.format(&self.format).to_string());
        let length = placeholder.chars().count();

        loop {
            let mut inner = TextPrompt::new(format!("{} ({placeholder})", self.text))
                .delimiter(self.delimiter.clone())
                .min(length.saturating_sub(2))
                .max(length);
            if let Some(formatted) = &formatted_default {
                inner = inner.default(formatted.clone());
            }
            let raw = inner.ask_on(console)?;

            // Verbatim match with the displayed default hands back the
            // original date, sidestepping lossy round-trips such as two
            // digit years.
            if let (Some(default), Some(formatted)) = (self.default, formatted_default.as_deref())
            {
                if raw == formatted {
                    return Ok(default);
                }
            }

            let parsed = match NaiveDate::parse_from_str(&raw, &self.format) {
                Ok(parsed) => parsed,
                Err(_) => {
                    console.notice(&invalid_input(Some(&raw)));
                    continue;
                }
            };
            match self.bounds.check(&parsed, Subject::Value) {
                Ok(()) => return Ok(parsed),
                Err(complaint) => console.notice(&complaint),
            }
        }
    }
}
