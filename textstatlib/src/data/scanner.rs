//! Character scanner for text statistics.
//!
//! Every count in this crate comes out of a single pass over the characters
//! of the input. [`Tally`] holds the running state of that pass, and
//! [`Scanner`] feeds it from any byte stream decoded as UTF-8, so large
//! files never have to be held in memory.
//!
//! Counting in one pass is equivalent to the trim / split / strip recipe:
//!
//! - every maximal run of non-whitespace characters is one token of the
//!   trimmed text split on whitespace runs
//! - non-whitespace characters are exactly what remains after removing
//!   whitespace
//! - the raw character count is untouched by trimming

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;
use utf8_chars::BufReadCharsExt;

use crate::error::TextstatError;
use crate::options::EmptyInput;
use crate::Result;

use super::stats::TextStats;

/// Running state of a single pass over text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tally {
    words: u64,
    non_whitespace: u64,
    chars: u64,
    in_word: bool,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one more character.
    ///
    /// Whitespace is the Unicode `White_Space` property (`char::is_whitespace`).
    /// NEL (U+0085) separates words; the byte order mark (U+FEFF) does not
    /// and counts as a letter.
    pub fn push(&mut self, c: char) {
        self.chars += 1;
        if c.is_whitespace() {
            self.in_word = false;
        } else {
            self.non_whitespace += 1;
            if !self.in_word {
                self.words += 1;
                self.in_word = true;
            }
        }
    }

    /// Account for every character of `text`.
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c);
        }
    }

    /// Produce the final counts.
    ///
    /// Only text without any token is affected by `empty_input`.
    pub fn finish(self, empty_input: EmptyInput) -> TextStats {
        let word_count = match (self.words, empty_input) {
            (0, EmptyInput::Zero) => 0,
            (0, EmptyInput::SingleToken) => 1,
            (n, _) => n,
        };

        TextStats {
            word_count,
            letter_count_excluding_spaces: self.non_whitespace,
            letter_count_including_spaces: self.chars,
        }
    }
}

/// Streams characters out of a reader into a [`Tally`].
pub struct Scanner<T: Read> {
    reader: BufReader<T>,
    source: PathBuf,
    tally: Tally,
}

impl Scanner<File> {
    /// Create a scanner over the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TextstatError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            reader: BufReader::new(file),
            source: path.to_path_buf(),
            tally: Tally::new(),
        })
    }
}

impl<T: Read> Scanner<T> {
    /// Create a scanner over an arbitrary reader.
    ///
    /// Errors name the source as `<stream>`; use [`Scanner::named`] to label it.
    pub fn from_reader(reader: T) -> Self {
        Self {
            reader: BufReader::new(reader),
            source: PathBuf::from("<stream>"),
            tally: Tally::new(),
        }
    }

    /// Label the source used in error messages.
    pub fn named(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Consume the whole stream and return its counts.
    pub fn scan(mut self, empty_input: EmptyInput) -> Result<TextStats> {
        for c in self.reader.chars() {
            let c = c.map_err(|e| TextstatError::Decode {
                path: self.source.clone(),
                message: e.to_string(),
            })?;
            self.tally.push(c);
        }

        let stats = self.tally.finish(empty_input);
        debug!(
            "scanned {}: {} words, {} chars",
            self.source.display(),
            stats.word_count,
            stats.letter_count_including_spaces
        );
        Ok(stats)
    }
}
