//! Wiring between an editable text value and a display of its counters.
//!
//! The computation itself knows nothing about where text comes from or
//! where labels go. A [`TextWatcher`] receives "value changed"
//! notifications, computes fresh counts for the new value and hands the
//! formatted labels to a [`StatsSurface`]. Each notification runs to
//! completion before the next one is accepted.
//!
//! ```rust
//! use textstatlib::{StatsLabels, TextWatcher};
//!
//! let mut watcher = TextWatcher::new(Vec::<StatsLabels>::new());
//! watcher.on_change("hello").unwrap();
//! watcher.on_change("hello world").unwrap();
//!
//! let shown = watcher.into_surface();
//! assert_eq!(shown.len(), 2);
//! assert_eq!(shown[1].word_count, "Word count: 2");
//! ```

use std::io::{self, Write};

use log::trace;

use crate::data::counter::compute_with;
use crate::data::stats::TextStats;
use crate::options::EmptyInput;
use crate::output::labels::StatsLabels;

/// Somewhere the three counter labels can be shown.
pub trait StatsSurface {
    /// Replace whatever is currently shown with `labels`.
    fn show(&mut self, labels: &StatsLabels) -> io::Result<()>;
}

/// Records every set of labels shown, oldest first.
impl StatsSurface for Vec<StatsLabels> {
    fn show(&mut self, labels: &StatsLabels) -> io::Result<()> {
        self.push(labels.clone());
        Ok(())
    }
}

/// Writes the labels as three lines to any writer.
#[derive(Debug)]
pub struct WriterSurface<W: Write> {
    writer: W,
}

impl<W: Write> WriterSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StatsSurface for WriterSurface<W> {
    fn show(&mut self, labels: &StatsLabels) -> io::Result<()> {
        for line in labels.lines() {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()
    }
}

/// Recomputes and displays counters whenever the watched value changes.
pub struct TextWatcher<S: StatsSurface> {
    surface: S,
    empty_input: EmptyInput,
    last: Option<TextStats>,
}

impl<S: StatsSurface> TextWatcher<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            empty_input: EmptyInput::default(),
            last: None,
        }
    }

    /// Use `policy` for empty and whitespace-only values.
    pub fn with_empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    /// Handle one change notification carrying the field's current value.
    pub fn on_change(&mut self, value: &str) -> io::Result<TextStats> {
        let stats = compute_with(value, self.empty_input);
        trace!("value changed: {} chars", stats.letter_count_including_spaces);
        self.surface.show(&StatsLabels::from(&stats))?;
        self.last = Some(stats);
        Ok(stats)
    }

    /// Counts from the most recent notification, if any.
    pub fn last(&self) -> Option<TextStats> {
        self.last
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// The content of an editable text field.
///
/// Each edit that goes through [`EditBuffer::apply`] notifies the watcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    content: String,
}

/// A single edit to an [`EditBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Add text at the end
    Append(String),
    /// Replace the whole content
    Set(String),
    /// Remove the last `n` characters
    Backspace(usize),
    /// Remove everything
    Clear,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// Remove up to `n` trailing characters.
    pub fn backspace(&mut self, n: usize) {
        for _ in 0..n {
            if self.content.pop().is_none() {
                break;
            }
        }
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Perform `edit`, then notify `watcher` with the new content.
    pub fn apply<S: StatsSurface>(
        &mut self,
        edit: Edit,
        watcher: &mut TextWatcher<S>,
    ) -> io::Result<TextStats> {
        match edit {
            Edit::Append(text) => self.append(&text),
            Edit::Set(text) => self.set(text),
            Edit::Backspace(n) => self.backspace(n),
            Edit::Clear => self.clear(),
        }
        watcher.on_change(&self.content)
    }
}
