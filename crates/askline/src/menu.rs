//! Menu-backed prompts: confirmation, single choice, and multi-choice.
//!
//! Options come in two shapes: plain labels, where the answer is the chosen
//! position, and label-value pairs, where the answer is the mapped value.
//! Dismissing a menu without choosing falls back to the configured default;
//! with no default the menu comes back. Defaults are named by index or label
//! and resolved before anything renders, so naming a missing option fails
//! the ask instead of rendering a broken menu.

use crate::console::{Console, TermConsole};
use crate::error::AskError;
use crate::validate::{invalid_input, Bounds, Subject};

/// Yes/no question rendered as a two-entry menu.
///
/// The label matching the default carries a `✓` marker, and the cursor
/// starts on `No` only when the default is explicitly `false`.
pub struct ConfirmPrompt {
    text: String,
    default: Option<bool>,
}

impl ConfirmPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), default: None }
    }

    /// Answer assumed when the menu is dismissed without choosing.
    pub fn default(mut self, value: bool) -> Self {
        self.default = Some(value);
        self
    }

    /// Ask on the process terminal.
    pub fn ask(self) -> Result<bool, AskError> {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    pub fn ask_on(self, console: &mut dyn Console) -> Result<bool, AskError> {
        let labels = [
            format!("Yes{}", if self.default == Some(true) { " ✓" } else { "" }),
            format!("No{}", if self.default == Some(false) { " ✓" } else { "" }),
        ];
        let cursor = if self.default == Some(false) { Some(1) } else { Some(0) };

        loop {
            match console.select(&self.text, &labels, cursor)? {
                Some(index) => return Ok(index == 0),
                None => {
                    if let Some(default) = self.default {
                        return Ok(default);
                    }
                    console.notice(&invalid_input(None));
                }
            }
        }
    }
}

/// A default or preselection, named by option position or label.
enum Pick {
    Index(usize),
    Label(String),
}

/// Resolve a pick against the rendered labels.
fn position_of(pick: &Pick, labels: &[String]) -> Result<usize, AskError> {
    match pick {
        Pick::Index(index) if *index < labels.len() => Ok(*index),
        Pick::Index(index) => Err(AskError::UnknownDefault(index.to_string())),
        Pick::Label(label) => labels
            .iter()
            .position(|candidate| candidate == label)
            .ok_or_else(|| AskError::UnknownDefault(label.clone())),
    }
}

/// Single choice from a menu.
///
/// Built with [`among`](ChoosePrompt::among) the answer is the chosen
/// option's position; built with [`mapping`](ChoosePrompt::mapping) it is
/// the value paired with the chosen label.
pub struct ChoosePrompt<V> {
    title: String,
    entries: Vec<(String, V)>,
    default: Option<Pick>,
}

impl ChoosePrompt<usize> {
    /// Options as plain labels.
    pub fn among<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| (label.into(), index))
            .collect();
        Self { title: title.into(), entries, default: None }
    }
}

impl<V> ChoosePrompt<V> {
    /// Options as label-value pairs.
    pub fn mapping<I, S>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .collect();
        Self { title: title.into(), entries, default: None }
    }

    /// Default named by option position.
    pub fn default_index(mut self, index: usize) -> Self {
        self.default = Some(Pick::Index(index));
        self
    }

    /// Default named by option label.
    pub fn default_label(mut self, label: impl Into<String>) -> Self {
        self.default = Some(Pick::Label(label.into()));
        self
    }

    /// Ask on the process terminal.
    pub fn ask(self) -> Result<V, AskError> {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    ///
    /// # Errors
    ///
    /// [`AskError::NoOptions`] with no entries,
    /// [`AskError::UnknownDefault`] when the default names a missing option,
    /// and terminal failures.
    pub fn ask_on(mut self, console: &mut dyn Console) -> Result<V, AskError> {
        if self.entries.is_empty() {
            return Err(AskError::NoOptions);
        }
        let labels: Vec<String> = self
            .entries
            .iter()
            .map(|(label, _)| label.clone())
            .collect();
        let cursor = match &self.default {
            Some(pick) => Some(position_of(pick, &labels)?),
            None => None,
        };

        let chosen = loop {
            match console.select(&self.title, &labels, cursor)? {
                Some(index) => break index,
                // Dismissal lands on the default, which already sits under
                // the cursor.
                None => match cursor {
                    Some(position) => break position,
                    None => console.notice(&invalid_input(None)),
                },
            }
        };
        Ok(self.entries.swap_remove(chosen).1)
    }
}

/// Several choices from one menu, with optional selection-count bounds.
///
/// The same label/mapping duality as [`ChoosePrompt`]; the answer keeps the
/// order the terminal reports selections in. Preselected entries are marked
/// when the menu opens and also serve as the dismissal fallback.
pub struct MultiChoosePrompt<V> {
    title: String,
    entries: Vec<(String, V)>,
    preselected: Option<Vec<Pick>>,
    bounds: Bounds<usize>,
}

impl MultiChoosePrompt<usize> {
    /// Options as plain labels.
    pub fn among<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| (label.into(), index))
            .collect();
        Self {
            title: title.into(),
            entries,
            preselected: None,
            bounds: Bounds::default(),
        }
    }
}

impl<V> MultiChoosePrompt<V> {
    /// Options as label-value pairs.
    pub fn mapping<I, S>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .collect();
        Self {
            title: title.into(),
            entries,
            preselected: None,
            bounds: Bounds::default(),
        }
    }

    /// Preselected entries named by option position.
    pub fn preselect_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.preselected = Some(indices.into_iter().map(Pick::Index).collect());
        self
    }

    /// Preselected entries named by option label.
    pub fn preselect_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.preselected = Some(
            labels
                .into_iter()
                .map(|label| Pick::Label(label.into()))
                .collect(),
        );
        self
    }

    /// Fewest acceptable selections, inclusive.
    pub fn min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Most acceptable selections, inclusive.
    pub fn max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Ask on the process terminal.
    pub fn ask(self) -> Result<Vec<V>, AskError>
    where
        V: Clone,
    {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    ///
    /// # Errors
    ///
    /// [`AskError::NoOptions`] with no entries,
    /// [`AskError::UnknownDefault`] when a preselection names a missing
    /// option, and terminal failures.
    pub fn ask_on(self, console: &mut dyn Console) -> Result<Vec<V>, AskError>
    where
        V: Clone,
    {
        if self.entries.is_empty() {
            return Err(AskError::NoOptions);
        }
        let labels: Vec<String> = self
            .entries
            .iter()
            .map(|(label, _)| label.clone())
            .collect();
        let preselected = match &self.preselected {
            Some(picks) => Some(
                picks
                    .iter()
                    .map(|pick| position_of(pick, &labels))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };
        let marked = preselected.as_deref().unwrap_or(&[]);

        let chosen = loop {
            match console.multi_select(&self.title, &labels, marked)? {
                Some(selection) => {
                    // Count bounds apply to the raw selection; the menu
                    // comes back with the original preselection, not the
                    // rejected picks.
                    if let Err(complaint) = self.bounds.check(&selection.len(), Subject::Length) {
                        console.notice(&complaint);
                        continue;
                    }
                    break selection;
                }
                None => match &preselected {
                    Some(positions) => break positions.clone(),
                    None => console.notice(&invalid_input(None)),
                },
            }
        };

        Ok(chosen
            .into_iter()
            .map(|index| self.entries[index].1.clone())
            .collect())
    }
}
