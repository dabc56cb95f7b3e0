//! Input options for counting operations.
//!
//! This module contains the configuration types that control how text is
//! counted and how multi-file results are grouped and ordered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How to count words in text that is empty or whitespace only.
///
/// Splitting a trimmed empty string on whitespace runs can be read two ways:
/// as no tokens at all, or as a single empty token. `Zero` is the default
/// and the only policy under which word counts add up across inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyInput {
    /// Empty and whitespace-only text has no words
    #[default]
    Zero,
    /// Empty and whitespace-only text counts as one (empty) word
    SingleToken,
}

impl FromStr for EmptyInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" | "0" => Ok(EmptyInput::Zero),
            "single-token" | "single" | "one" | "1" => Ok(EmptyInput::SingleToken),
            _ => Err(format!("Unknown empty input policy: {}", s)),
        }
    }
}

/// Aggregation level for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aggregation {
    /// Only return totals
    #[default]
    Total,
    /// Include per-file breakdown
    ByFile,
}

/// Field to order per-file results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Order by path (lexicographical)
    #[default]
    Path,
    /// Order by word count
    Words,
    /// Order by letter count excluding whitespace
    Letters,
    /// Order by raw character count
    Chars,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "path" | "name" | "file" => Ok(OrderBy::Path),
            "words" | "word" => Ok(OrderBy::Words),
            "letters" | "letter" => Ok(OrderBy::Letters),
            "chars" | "char" | "characters" => Ok(OrderBy::Chars),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

/// Ordering configuration for per-file results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ordering {
    /// Field to order by
    pub by: OrderBy,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Ordering {
    /// Order by path ascending (default)
    pub fn by_path() -> Self {
        Self::default()
    }

    /// Order by word count, largest first
    pub fn by_words() -> Self {
        Self {
            by: OrderBy::Words,
            direction: OrderDirection::Descending,
        }
    }

    /// Order by `by`: A-Z for paths, largest first for counts.
    pub fn natural(by: OrderBy) -> Self {
        let direction = match by {
            OrderBy::Path => OrderDirection::Ascending,
            _ => OrderDirection::Descending,
        };
        Self { by, direction }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = OrderDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Descending;
        self
    }
}

/// Options for counting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountOptions {
    /// Word count policy for empty and whitespace-only text
    pub empty_input: EmptyInput,
    /// Aggregation level for multi-file results
    pub aggregation: Aggregation,
    /// Ordering of per-file results
    pub ordering: Ordering,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty input policy.
    pub fn empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    /// Set aggregation level.
    pub fn aggregation(mut self, level: Aggregation) -> Self {
        self.aggregation = level;
        self
    }

    /// Set per-file ordering.
    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }
}
