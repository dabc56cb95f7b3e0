//! Core data structures for text statistics.
//!
//! A [`TextStats`] holds the three counters shown for a piece of text:
//!
//! - **word_count**: maximal runs of non-whitespace characters
//! - **letter_count_excluding_spaces**: characters that are not whitespace
//! - **letter_count_including_spaces**: every character, untrimmed
//!
//! Lengths are measured in Unicode scalar values (`char`), not bytes.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use crate::options::OrderBy;

/// Word and letter counts for a piece of text.
///
/// Values are computed fresh for each input and never mutated afterwards,
/// except through `+=` when aggregating several inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of whitespace-separated tokens
    pub word_count: u64,
    /// Characters left after removing every whitespace character
    pub letter_count_excluding_spaces: u64,
    /// Raw character count of the untrimmed text
    pub letter_count_including_spaces: u64,
}

impl TextStats {
    /// Create a new TextStats with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of whitespace characters in the text.
    pub fn whitespace_count(&self) -> u64 {
        self.letter_count_including_spaces - self.letter_count_excluding_spaces
    }

    /// True when the text had no characters at all.
    pub fn is_empty(&self) -> bool {
        self.letter_count_including_spaces == 0
    }

    /// Value of the field selected by `by`, used for ordering.
    ///
    /// `OrderBy::Path` has no numeric value and returns 0.
    pub fn value_of(&self, by: OrderBy) -> u64 {
        match by {
            OrderBy::Path => 0,
            OrderBy::Words => self.word_count,
            OrderBy::Letters => self.letter_count_excluding_spaces,
            OrderBy::Chars => self.letter_count_including_spaces,
        }
    }
}

impl Add for TextStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            word_count: self.word_count + other.word_count,
            letter_count_excluding_spaces: self.letter_count_excluding_spaces
                + other.letter_count_excluding_spaces,
            letter_count_including_spaces: self.letter_count_including_spaces
                + other.letter_count_including_spaces,
        }
    }
}

impl AddAssign for TextStats {
    fn add_assign(&mut self, other: Self) {
        self.word_count += other.word_count;
        self.letter_count_excluding_spaces += other.letter_count_excluding_spaces;
        self.letter_count_including_spaces += other.letter_count_including_spaces;
    }
}

impl std::iter::Sum for TextStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, s| acc + s)
    }
}

/// Statistics for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file.
    pub path: PathBuf,
    /// Counts for this file.
    pub stats: TextStats,
}

impl FileStats {
    /// Create new file stats.
    pub fn new(path: PathBuf, stats: TextStats) -> Self {
        Self { path, stats }
    }
}
