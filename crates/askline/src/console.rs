//! Terminal collaborator behind every prompt.
//!
//! [`Console`] is the seam between prompt logic and the terminal: reading
//! answer lines, printing notices, and running the two menu shapes. The
//! production implementation is [`TermConsole`]; tests substitute a scripted
//! implementation so whole conversations run without a terminal.

use std::fmt;
use std::io::{self, BufRead, Write};

use console::{Style, Term};
use dialoguer::theme::Theme;
use dialoguer::{MultiSelect, Select};

/// The terminal-facing side of a prompt conversation.
///
/// Prompt types own the retry and validation logic; everything that actually
/// touches the terminal goes through this trait.
pub trait Console {
    /// Print `prompt` without a trailing newline and read one answer line.
    ///
    /// Returns the line with its terminator still attached, like
    /// `read_line`. End of input while an answer is still expected is an
    /// error of kind [`io::ErrorKind::UnexpectedEof`], never an empty read.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print a one-line message, usually a validation complaint.
    fn notice(&mut self, message: &str);

    /// Run a single-choice menu over `labels` with the cursor on `cursor`.
    ///
    /// `Ok(None)` means the menu was dismissed without choosing.
    fn select(
        &mut self,
        title: &str,
        labels: &[String],
        cursor: Option<usize>,
    ) -> io::Result<Option<usize>>;

    /// Run a multi-choice menu with the `preselected` entries already
    /// marked.
    ///
    /// Returns the marked positions in the order the terminal reports them,
    /// or `Ok(None)` if the menu was dismissed.
    fn multi_select(
        &mut self,
        title: &str,
        labels: &[String],
        preselected: &[usize],
    ) -> io::Result<Option<Vec<usize>>>;
}

/// Menu look shared by both menu shapes: bold title, `>` cursor, `[*]` marks
/// on picked multi-select entries.
struct MenuTheme {
    title_style: Style,
    active_style: Style,
}

impl MenuTheme {
    fn new() -> Self {
        Self {
            title_style: Style::new().bold(),
            active_style: Style::new().cyan(),
        }
    }
}

impl Theme for MenuTheme {
    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{}", self.title_style.apply_to(prompt))
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{}", self.active_style.apply_to(format!("> {}", text)))
        } else {
            write!(f, "  {}", text)
        }
    }

    fn format_multi_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.format_select_prompt(f, prompt)
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let mark = if checked { "[*]" } else { "[ ]" };
        if active {
            write!(
                f,
                "{}",
                self.active_style.apply_to(format!("> {} {}", mark, text))
            )
        } else {
            write!(f, "  {} {}", mark, text)
        }
    }
}

/// Production [`Console`] backed by stdin, stdout, and `dialoguer` menus.
#[derive(Default)]
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        TermConsole
    }
}

fn into_io(err: dialoguer::Error) -> io::Error {
    let dialoguer::Error::IO(err) = err;
    err
}

impl Console for TermConsole {
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line)
    }

    fn notice(&mut self, message: &str) {
        println!("{message}");
    }

    fn select(
        &mut self,
        title: &str,
        labels: &[String],
        cursor: Option<usize>,
    ) -> io::Result<Option<usize>> {
        let theme = MenuTheme::new();
        let mut menu = Select::with_theme(&theme).with_prompt(title).items(labels);
        if let Some(cursor) = cursor {
            menu = menu.default(cursor);
        }
        menu.interact_opt().map_err(into_io)
    }

    fn multi_select(
        &mut self,
        title: &str,
        labels: &[String],
        preselected: &[usize],
    ) -> io::Result<Option<Vec<usize>>> {
        let marked: Vec<bool> = (0..labels.len())
            .map(|index| preselected.contains(&index))
            .collect();

        let theme = MenuTheme::new();
        MultiSelect::with_theme(&theme)
            .with_prompt(title)
            .items(labels)
            .defaults(&marked)
            .interact_opt()
            .map_err(into_io)
    }
}

/// Clear the visible terminal screen.
pub fn clear_screen() -> io::Result<()> {
    Term::stdout().clear_screen()
}
