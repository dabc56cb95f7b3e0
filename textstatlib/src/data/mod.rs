//! Data collection: scan text and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading text and
//! producing counts. It provides:
//!
//! - **Scanning**: Single-pass character tally, over strings or streams
//! - **Statistics**: Core data structures (`TextStats`, `FileStats`)
//! - **Counting**: High-level API (`compute`, `count_file`, `count_paths`)
//! - **Analysis**: Extended report with sentences, vocabulary and readability
//!
//! ## Example
//!
//! ```rust
//! use textstatlib::data::{analyze, compute};
//!
//! let stats = compute("line1\nline2");
//! assert_eq!(stats.word_count, 2);
//!
//! let report = analyze("One. Two!");
//! assert_eq!(report.sentence_count, 2);
//! ```

pub mod analysis;
pub mod counter;
pub mod readability;
pub mod scanner;
pub mod stats;

pub use analysis::{analyze, analyze_with, TextReport};
pub use counter::{
    compute, compute_with, count_directory, count_file, count_paths, count_reader, CountResult,
};
pub use readability::{count_syllables, Readability};
pub use scanner::{Scanner, Tally};
pub use stats::{FileStats, TextStats};
