//! Output formatting: present statistics as display strings.
//!
//! This module handles the last stage of the pipeline - turning counts into
//! strings ready for display. It provides:
//!
//! - **StatsLabels**: The three labelled counter lines for one text
//! - **StatsTable**: Table-ready data with headers, rows, and footer
//!
//! Both are pure presentation: they only format numbers that were already
//! computed.
//!
//! ## Example
//!
//! ```rust
//! use textstatlib::{compute, StatsLabels};
//!
//! let labels = StatsLabels::from(&compute("hello world"));
//! assert_eq!(labels.word_count, "Word count: 2");
//! ```

pub mod labels;
pub mod table;

pub use labels::StatsLabels;
pub use table::{StatsTable, TableRow};
