//! Labelled counter lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::stats::TextStats;

pub const WORD_COUNT_LABEL: &str = "Word count: ";
pub const EXCLUDING_SPACES_LABEL: &str = "Letter count (excluding spaces): ";
pub const INCLUDING_SPACES_LABEL: &str = "Letter count (including spaces): ";

/// The three display strings for a [`TextStats`], one per counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsLabels {
    /// `"Word count: {n}"`
    pub word_count: String,
    /// `"Letter count (excluding spaces): {n}"`
    pub letter_count_excluding_spaces: String,
    /// `"Letter count (including spaces): {n}"`
    pub letter_count_including_spaces: String,
}

impl StatsLabels {
    /// The lines in display order.
    pub fn lines(&self) -> [&str; 3] {
        [
            &self.word_count,
            &self.letter_count_excluding_spaces,
            &self.letter_count_including_spaces,
        ]
    }
}

impl From<&TextStats> for StatsLabels {
    fn from(stats: &TextStats) -> Self {
        Self {
            word_count: format!("{WORD_COUNT_LABEL}{}", stats.word_count),
            letter_count_excluding_spaces: format!(
                "{EXCLUDING_SPACES_LABEL}{}",
                stats.letter_count_excluding_spaces
            ),
            letter_count_including_spaces: format!(
                "{INCLUDING_SPACES_LABEL}{}",
                stats.letter_count_including_spaces
            ),
        }
    }
}

impl From<TextStats> for StatsLabels {
    fn from(stats: TextStats) -> Self {
        Self::from(&stats)
    }
}

impl fmt::Display for StatsLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::counter::compute;

    #[test]
    fn test_labels_exact_strings() {
        let labels = StatsLabels::from(&compute("hello world"));
        assert_eq!(labels.word_count, "Word count: 2");
        assert_eq!(
            labels.letter_count_excluding_spaces,
            "Letter count (excluding spaces): 10"
        );
        assert_eq!(
            labels.letter_count_including_spaces,
            "Letter count (including spaces): 11"
        );
    }

    #[test]
    fn test_labels_for_empty_text() {
        let labels = StatsLabels::from(compute(""));
        assert_eq!(
            labels.lines(),
            [
                "Word count: 0",
                "Letter count (excluding spaces): 0",
                "Letter count (including spaces): 0",
            ]
        );
    }

    #[test]
    fn test_display_joins_lines() {
        let labels = StatsLabels::from(compute("a"));
        assert_eq!(
            labels.to_string(),
            "Word count: 1\nLetter count (excluding spaces): 1\nLetter count (including spaces): 1"
        );
    }
}
