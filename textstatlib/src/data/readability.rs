//! Readability scores.
//!
//! Three grade-level formulas computed from word, sentence and syllable
//! counts:
//!
//! - **Flesch-Kincaid grade**: `0.39 * W/S + 11.8 * Y/W - 15.59`
//! - **Gunning Fog index**: `0.4 * (W/S + 100 * C/W)`
//! - **SMOG grade**: `1.043 * sqrt(C * 30 / S) + 3.1291`
//!
//! where `W` is words, `S` sentences, `Y` syllables and `C` complex words
//! (three syllables or more). Syllables are estimated from vowel groups, so
//! scores are only meaningful for English prose.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]+").unwrap());
static DIPHTHONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiou]{2}").unwrap());
static TRIPHTHONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiou]{3}").unwrap());
static CONSONANT_EDGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^aeiouy]+|[^aeiouy]+$").unwrap());

/// Words with at least this many syllables count as complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Estimate the number of syllables in a word. Never returns 0.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let trimmed = CONSONANT_EDGES.replace_all(&word, "");
    let merged = TRIPHTHONG.replace_all(&trimmed, "a");
    let merged = DIPHTHONG.replace_all(&merged, "a");

    VOWEL_GROUP.find_iter(&merged).count().max(1)
}

/// Readability scores with their interpretations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Readability {
    pub flesch_kincaid_grade: f64,
    pub gunning_fog_index: f64,
    pub smog_grade: f64,
    /// Coarse level derived from the Flesch-Kincaid grade
    pub english_level: &'static str,
    pub smog_interpretation: &'static str,
    pub fog_interpretation: &'static str,
    pub syllable_count: usize,
    pub complex_word_count: usize,
}

impl Readability {
    /// Score a list of word tokens spread over `sentence_count` sentences.
    ///
    /// Text with words but no sentence terminator is scored as one sentence.
    /// Without any word every score is 0.
    pub fn from_words(words: &[&str], sentence_count: usize) -> Self {
        let syllables: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();
        let syllable_count: usize = syllables.iter().sum();
        let complex_word_count = syllables
            .iter()
            .filter(|&&s| s >= COMPLEX_WORD_SYLLABLES)
            .count();

        let (flesch_kincaid_grade, gunning_fog_index, smog_grade) = if words.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let w = words.len() as f64;
            let s = sentence_count.max(1) as f64;
            let y = syllable_count as f64;
            let c = complex_word_count as f64;
            (
                0.39 * (w / s) + 11.8 * (y / w) - 15.59,
                0.4 * ((w / s) + 100.0 * (c / w)),
                1.043 * (c * (30.0 / s)).sqrt() + 3.1291,
            )
        };

        Self {
            flesch_kincaid_grade,
            gunning_fog_index,
            smog_grade,
            english_level: english_level(flesch_kincaid_grade),
            smog_interpretation: interpret_smog(smog_grade),
            fog_interpretation: interpret_fog(gunning_fog_index),
            syllable_count,
            complex_word_count,
        }
    }
}

/// Coarse English level for a Flesch-Kincaid grade.
pub fn english_level(flesch_kincaid: f64) -> &'static str {
    if flesch_kincaid <= 5.0 {
        "Basic"
    } else if flesch_kincaid <= 8.0 {
        "Intermediate"
    } else {
        "Advanced"
    }
}

/// Interpretation of a SMOG grade.
pub fn interpret_smog(smog: f64) -> &'static str {
    match smog {
        x if x <= 6.0 => "Basic English",
        x if x <= 9.0 => "Intermediate English",
        x if x <= 12.0 => "Upper Intermediate",
        x if x <= 16.0 => "Advanced",
        _ => "Very Advanced",
    }
}

/// Interpretation of a Gunning Fog index.
pub fn interpret_fog(fog: f64) -> &'static str {
    match fog {
        x if x <= 8.0 => "Basic English",
        x if x <= 12.0 => "Intermediate",
        x if x <= 16.0 => "Advanced",
        _ => "Very Advanced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("Beautiful"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("queue"), 1);
        assert_eq!(count_syllables("strengths"), 1);
        assert_eq!(count_syllables("dog."), 1);
        assert_eq!(count_syllables("42"), 1);
    }

    #[test]
    fn test_no_words_scores_zero() {
        let r = Readability::from_words(&[], 0);
        assert_eq!(r.flesch_kincaid_grade, 0.0);
        assert_eq!(r.gunning_fog_index, 0.0);
        assert_eq!(r.smog_grade, 0.0);
        assert_eq!(r.english_level, "Basic");
        assert_eq!(r.smog_interpretation, "Basic English");
        assert_eq!(r.fog_interpretation, "Basic English");
    }

    #[test]
    fn test_simple_sentence_scores() {
        // 4 words, 1 sentence, 4 syllables, no complex words
        let r = Readability::from_words(&["The", "cat", "sat", "down."], 1);
        assert_eq!(r.syllable_count, 4);
        assert_eq!(r.complex_word_count, 0);
        assert!(close(r.flesch_kincaid_grade, 0.39 * 4.0 + 11.8 - 15.59));
        assert!(close(r.gunning_fog_index, 0.4 * 4.0));
        assert!(close(r.smog_grade, 3.1291));
        assert_eq!(r.english_level, "Basic");
    }

    #[test]
    fn test_missing_terminator_counts_one_sentence() {
        let words = ["beautiful", "day"];
        assert_eq!(
            Readability::from_words(&words, 0),
            Readability::from_words(&words, 1)
        );
        assert!(Readability::from_words(&words, 0).smog_grade.is_finite());
    }

    #[test]
    fn test_interpretations() {
        assert_eq!(english_level(8.0), "Intermediate");
        assert_eq!(english_level(8.1), "Advanced");
        assert_eq!(interpret_smog(9.0), "Intermediate English");
        assert_eq!(interpret_smog(11.5), "Upper Intermediate");
        assert_eq!(interpret_smog(16.0), "Advanced");
        assert_eq!(interpret_smog(17.0), "Very Advanced");
        assert_eq!(interpret_fog(12.0), "Intermediate");
        assert_eq!(interpret_fog(15.9), "Advanced");
        assert_eq!(interpret_fog(20.0), "Very Advanced");
    }
}
