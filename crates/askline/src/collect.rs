//! Collection prompts: ordered lists, fixed tuples, unique sets.
//!
//! One prompt type parameterized by its target container. A single line is
//! read, split on the separator, and every piece parsed; one bad piece fails
//! the whole line. Length bounds apply to the built container, so a set
//! counts its elements after deduplication.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::console::{Console, TermConsole};
use crate::error::AskError;
use crate::line::{read_loop, render_prompt};
use crate::validate::{Bounds, Subject};

/// Containers a [`CollectPrompt`] can produce.
pub trait Collection<T>: FromIterator<T> {
    /// Element count of the built container; for sets, after deduplication.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit elements in the container's own order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

impl<T> Collection<T> for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }
}

impl<T> Collection<T> for Box<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        <[T]>::iter(self)
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        BTreeSet::iter(self)
    }
}

/// Prompt for several values on one line, separated by a configurable
/// separator (`","` unless changed).
pub struct CollectPrompt<C> {
    text: String,
    default: Option<C>,
    delimiter: String,
    separator: String,
    bounds: Bounds<usize>,
}

/// [`CollectPrompt`] producing an ordered `Vec`.
pub type ListPrompt<T> = CollectPrompt<Vec<T>>;

/// [`CollectPrompt`] producing a boxed slice, frozen once read.
pub type TuplePrompt<T> = CollectPrompt<Box<[T]>>;

/// [`CollectPrompt`] producing a deduplicated, ordered set.
pub type SetPrompt<T> = CollectPrompt<BTreeSet<T>>;

impl<C> CollectPrompt<C> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
            delimiter: ": ".to_string(),
            separator: ",".to_string(),
            bounds: Bounds::default(),
        }
    }

    /// Collection returned when the user answers with an empty line.
    pub fn default(mut self, value: C) -> Self {
        self.default = Some(value);
        self
    }

    /// Text between the prompt and the cursor, `": "` unless changed.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Text splitting one element from the next.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Fewest acceptable elements, inclusive.
    pub fn min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Most acceptable elements, inclusive.
    pub fn max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Ask on the process terminal.
    pub fn ask<T>(self) -> Result<C, AskError>
    where
        C: Collection<T>,
        T: FromStr + fmt::Display,
    {
        self.ask_on(&mut TermConsole::new())
    }

    /// Ask on an explicit console.
    pub fn ask_on<T>(self, console: &mut dyn Console) -> Result<C, AskError>
    where
        C: Collection<T>,
        T: FromStr + fmt::Display,
    {
        let shown_default = self.default.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        });
        let rendered = render_prompt(
            &format!("{} (Separate values by `{}`)", self.text, self.separator),
            shown_default,
            &self.delimiter,
        );

        let CollectPrompt { default, separator, bounds, .. } = self;
        read_loop(
            console,
            &rendered,
            default,
            |raw| {
                raw.split(separator.as_str())
                    .map(|piece| piece.trim().parse().ok())
                    .collect::<Option<C>>()
            },
            |items| bounds.check(&items.len(), Subject::Length),
        )
    }
}
