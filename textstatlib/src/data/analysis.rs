//! Extended text report.
//!
//! On top of the three counters, a [`TextReport`] describes sentences,
//! paragraphs, vocabulary and readability. Unlike [`compute`], this needs the
//! whole text in memory.
//!
//! [`compute`]: super::counter::compute

use std::collections::HashMap;

use serde::Serialize;

use crate::options::EmptyInput;

use super::counter::compute_with;
use super::readability::Readability;
use super::stats::TextStats;

/// Full statistics for a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextReport {
    /// The three basic counters
    pub stats: TextStats,
    /// Number of `.`, `!` and `?` characters
    pub sentence_count: usize,
    /// Blocks separated by an empty line that contain something besides whitespace
    pub paragraph_count: usize,
    /// Mean word length in characters
    pub average_word_length: f64,
    /// Mean number of words per sentence
    pub average_sentence_length: f64,
    /// First of the longest words
    pub longest_word: String,
    /// Most frequent word, lower-cased; earliest wins a tie
    pub most_common_word: String,
    /// Number of distinct lower-cased words
    pub unique_word_count: usize,
    pub readability: Readability,
}

/// Build the extended report for `text`.
///
/// # Example
///
/// ```rust
/// use textstatlib::analyze;
///
/// let report = analyze("The cat sat. The dog ran!");
/// assert_eq!(report.stats.word_count, 6);
/// assert_eq!(report.sentence_count, 2);
/// assert_eq!(report.most_common_word, "the");
/// ```
pub fn analyze(text: &str) -> TextReport {
    analyze_with(text, EmptyInput::Zero)
}

/// Build the extended report with an explicit empty input policy.
///
/// The policy only affects `stats.word_count`; the derived figures are
/// always computed from the actual tokens.
pub fn analyze_with(text: &str, empty_input: EmptyInput) -> TextReport {
    let stats = compute_with(text, empty_input);
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let sentence_count = text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
    let paragraph_count = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    let total_word_length: usize = words.iter().map(|w| w.chars().count()).sum();
    let average_word_length = if word_count > 0 {
        total_word_length as f64 / word_count as f64
    } else {
        0.0
    };
    let average_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let (most_common_word, unique_word_count) = word_frequencies(&words);

    TextReport {
        stats,
        sentence_count,
        paragraph_count,
        average_word_length,
        average_sentence_length,
        longest_word: longest_word(&words).to_string(),
        most_common_word,
        unique_word_count,
        readability: Readability::from_words(&words, sentence_count),
    }
}

fn longest_word<'a>(words: &[&'a str]) -> &'a str {
    let mut longest = "";
    let mut longest_len = 0;
    for word in words {
        let len = word.chars().count();
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }
    longest
}

/// Most common lower-cased word and the number of distinct words.
fn word_frequencies(words: &[&str]) -> (String, usize) {
    // (count, index of first occurrence) per word
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, word) in words.iter().enumerate() {
        counts.entry(word.to_lowercase()).or_insert((0, index)).0 += 1;
    }

    let most_common = counts
        .iter()
        .max_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
            a_count.cmp(b_count).then_with(|| b_first.cmp(a_first))
        })
        .map(|(word, _)| word.clone())
        .unwrap_or_default();

    (most_common, counts.len())
}
