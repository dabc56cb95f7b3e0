//! High-level counting API.
//!
//! This module provides the main entry points: [`compute`] for an in-memory
//! string, and file, stream and directory counting built on the same
//! single-pass [`Tally`].

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::TextstatError;
use crate::options::{Aggregation, CountOptions, EmptyInput, OrderBy, OrderDirection, Ordering};
use crate::source::filter::{discover_files, discover_paths, FilterConfig};
use crate::Result;

use super::scanner::{Scanner, Tally};
use super::stats::{FileStats, TextStats};

/// Compute word and letter counts for `text`.
///
/// Empty and whitespace-only text has a word count of 0. Use
/// [`compute_with`] to choose a different policy.
///
/// # Example
///
/// ```rust
/// use textstatlib::compute;
///
/// let stats = compute("hello world");
/// assert_eq!(stats.word_count, 2);
/// assert_eq!(stats.letter_count_excluding_spaces, 10);
/// assert_eq!(stats.letter_count_including_spaces, 11);
/// ```
pub fn compute(text: &str) -> TextStats {
    compute_with(text, EmptyInput::Zero)
}

/// Compute word and letter counts with an explicit empty input policy.
///
/// ```rust
/// use textstatlib::{compute_with, EmptyInput};
///
/// assert_eq!(compute_with("", EmptyInput::Zero).word_count, 0);
/// assert_eq!(compute_with("", EmptyInput::SingleToken).word_count, 1);
/// ```
pub fn compute_with(text: &str, empty_input: EmptyInput) -> TextStats {
    let mut tally = Tally::new();
    tally.push_str(text);
    tally.finish(empty_input)
}

/// Result of counting several files.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CountResult {
    /// Total number of files analyzed
    pub file_count: usize,
    /// Aggregated statistics across all files
    pub total: TextStats,
    /// Per-file statistics (if requested)
    pub files: Vec<FileStats>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, file: FileStats, keep_file: bool) {
        self.total += file.stats;
        self.file_count += 1;
        if keep_file {
            self.files.push(file);
        }
    }

    /// Sort per-file rows in place.
    ///
    /// Rows with equal counts stay in ascending path order whatever the
    /// direction.
    pub fn sort(&mut self, ordering: Ordering) {
        let descending = ordering.direction == OrderDirection::Descending;
        match ordering.by {
            OrderBy::Path => {
                self.files.sort_by(|a, b| a.path.cmp(&b.path));
                if descending {
                    self.files.reverse();
                }
            }
            by => self.files.sort_by(|a, b| {
                let (a_value, b_value) = (a.stats.value_of(by), b.stats.value_of(by));
                let by_value = if descending {
                    b_value.cmp(&a_value)
                } else {
                    a_value.cmp(&b_value)
                };
                by_value.then_with(|| a.path.cmp(&b.path))
            }),
        }
    }
}

/// Count a single file.
///
/// # Example
///
/// ```rust
/// use textstatlib::{count_file, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("note.txt");
/// fs::write(&path, "a short note\n").unwrap();
///
/// let stats = count_file(&path, &CountOptions::new()).unwrap();
/// assert_eq!(stats.word_count, 3);
/// assert_eq!(stats.letter_count_including_spaces, 13);
/// ```
pub fn count_file(path: impl AsRef<Path>, options: &CountOptions) -> Result<TextStats> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TextstatError::PathNotFound(path.to_path_buf()));
    }
    Scanner::open(path)?.scan(options.empty_input)
}

/// Count everything read from `reader`, labelling errors with `name`.
pub fn count_reader<R: Read>(
    reader: R,
    name: impl Into<PathBuf>,
    options: &CountOptions,
) -> Result<TextStats> {
    Scanner::from_reader(reader)
        .named(name)
        .scan(options.empty_input)
}

fn count_files(files: Vec<PathBuf>, options: &CountOptions) -> Result<CountResult> {
    let keep_files = matches!(options.aggregation, Aggregation::ByFile);
    let mut result = CountResult::new();

    for path in files {
        let stats = Scanner::open(&path)?.scan(options.empty_input)?;
        result.push(FileStats::new(path, stats), keep_files);
    }

    result.sort(options.ordering);
    debug!(
        "counted {} files: {} words",
        result.file_count, result.total.word_count
    );
    Ok(result)
}

/// Count every file under a directory.
///
/// # Example
///
/// ```rust
/// use textstatlib::{count_directory, Aggregation, CountOptions, FilterConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.txt"), "one two").unwrap();
/// fs::write(dir.path().join("b.md"), "three").unwrap();
///
/// let options = CountOptions::new().aggregation(Aggregation::ByFile);
/// let result = count_directory(dir.path(), &FilterConfig::new(), &options).unwrap();
/// assert_eq!(result.file_count, 2);
/// assert_eq!(result.total.word_count, 3);
/// assert_eq!(result.files.len(), 2);
/// ```
pub fn count_directory(
    path: impl AsRef<Path>,
    filter: &FilterConfig,
    options: &CountOptions,
) -> Result<CountResult> {
    let files = discover_files(path, filter)?;
    count_files(files, options)
}

/// Count a mix of files and directories.
///
/// Files named explicitly are always counted; directories are walked and
/// filtered. A file reached twice is counted once.
pub fn count_paths<P: AsRef<Path>>(
    paths: &[P],
    filter: &FilterConfig,
    options: &CountOptions,
) -> Result<CountResult> {
    let files = discover_paths(paths, filter)?;
    count_files(files, options)
}
