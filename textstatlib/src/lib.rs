//! # textstatlib
//!
//! Word and letter counters for text, the kind shown next to a text field
//! while someone types.
//!
//! ## Overview
//!
//! For any string the library computes three counters:
//!
//! - **Word count**: whitespace-separated tokens of the trimmed text
//! - **Letter count (excluding spaces)**: characters that are not whitespace
//! - **Letter count (including spaces)**: every character of the raw text
//!
//! Whitespace is anything `char::is_whitespace` accepts (space, tab,
//! newline, carriage return, form feed and the Unicode spaces), and lengths
//! are counted in `char`s. Computing the counters is a pure function over
//! the string and never fails.
//!
//! ## Features
//!
//! - **Labels**: The three counters formatted as display strings
//! - **Streaming**: Count files and readers without loading them in memory
//! - **Extended report**: Sentences, paragraphs, vocabulary, readability
//! - **Glob filtering**: Count directories with include/exclude patterns
//! - **View adapter**: Drive any display from "value changed" notifications
//!
//! ## Example
//!
//! ```rust
//! use textstatlib::{compute, compute_with, EmptyInput, StatsLabels};
//!
//! let stats = compute("  multiple   spaces  ");
//! assert_eq!(stats.word_count, 2);
//! assert_eq!(stats.letter_count_excluding_spaces, 14);
//! assert_eq!(stats.letter_count_including_spaces, 21);
//!
//! let labels = StatsLabels::from(&stats);
//! assert_eq!(labels.word_count, "Word count: 2");
//!
//! // Empty text has no words unless asked otherwise
//! assert_eq!(compute("").word_count, 0);
//! assert_eq!(compute_with("", EmptyInput::SingleToken).word_count, 1);
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;
pub mod view;

pub use data::{
    analyze, analyze_with, compute, compute_with, count_directory, count_file, count_paths,
    count_reader, count_syllables, CountResult, FileStats, Readability, Scanner, Tally,
    TextReport, TextStats,
};
pub use error::TextstatError;
pub use options::{Aggregation, CountOptions, EmptyInput, OrderBy, OrderDirection, Ordering};
pub use output::{StatsLabels, StatsTable, TableRow};
pub use source::{discover_files, discover_paths, FilterConfig};
pub use view::{Edit, EditBuffer, StatsSurface, TextWatcher, WriterSurface};

/// Result type for textstatlib operations
pub type Result<T> = std::result::Result<T, TextstatError>;
