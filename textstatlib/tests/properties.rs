//! Properties that hold for every input string.

use proptest::prelude::*;
use textstatlib::{
    compute, compute_with, count_reader, CountOptions, EmptyInput, StatsLabels, TextStats,
};

/// Mostly words and whitespace, so token boundaries get exercised.
fn wordy_text() -> impl Strategy<Value = String> {
    "[a-zé✓ \t\n\r\x0C]{0,64}"
}

proptest! {
    #[test]
    fn including_spaces_is_char_count(text in any::<String>()) {
        let stats = compute(&text);
        prop_assert_eq!(stats.letter_count_including_spaces, text.chars().count() as u64);
    }

    #[test]
    fn excluding_never_exceeds_including(text in any::<String>()) {
        let stats = compute(&text);
        prop_assert!(stats.letter_count_excluding_spaces <= stats.letter_count_including_spaces);
    }

    #[test]
    fn excluding_drops_exactly_the_whitespace(text in wordy_text()) {
        let stats = compute(&text);
        let whitespace = text.chars().filter(|c| c.is_whitespace()).count() as u64;
        prop_assert_eq!(
            stats.letter_count_excluding_spaces,
            text.chars().count() as u64 - whitespace
        );
        prop_assert_eq!(stats.whitespace_count(), whitespace);
    }

    #[test]
    fn word_count_is_number_of_tokens(text in wordy_text()) {
        let tokens = text.trim().split_whitespace().count() as u64;
        prop_assert_eq!(compute(&text).word_count, tokens);
    }

    #[test]
    fn single_token_policy_matches_naive_split(text in wordy_text()) {
        let naive = if text.trim().is_empty() {
            1
        } else {
            text.split_whitespace().count() as u64
        };
        prop_assert_eq!(compute_with(&text, EmptyInput::SingleToken).word_count, naive);
    }

    #[test]
    fn compute_is_idempotent(text in any::<String>()) {
        prop_assert_eq!(compute(&text), compute(&text));
    }

    #[test]
    fn streaming_matches_in_memory(text in any::<String>()) {
        let streamed = count_reader(text.as_bytes(), "<test>", &CountOptions::new()).unwrap();
        prop_assert_eq!(streamed, compute(&text));
    }

    #[test]
    fn counts_add_across_space_joined_texts(a in wordy_text(), b in wordy_text()) {
        let joined = format!("{a} {b}");
        let separator = TextStats {
            word_count: 0,
            letter_count_excluding_spaces: 0,
            letter_count_including_spaces: 1,
        };
        prop_assert_eq!(compute(&joined), compute(&a) + separator + compute(&b));
    }

    #[test]
    fn labels_carry_the_counts(text in wordy_text()) {
        let stats = compute(&text);
        let labels = StatsLabels::from(&stats);
        prop_assert_eq!(labels.word_count, format!("Word count: {}", stats.word_count));
        prop_assert_eq!(
            labels.letter_count_excluding_spaces,
            format!("Letter count (excluding spaces): {}", stats.letter_count_excluding_spaces)
        );
        prop_assert_eq!(
            labels.letter_count_including_spaces,
            format!("Letter count (including spaces): {}", stats.letter_count_including_spaces)
        );
    }
}

#[test]
fn documented_scenarios() {
    let cases = [
        ("hello world", (2, 10, 11)),
        ("", (0, 0, 0)),
        ("  multiple   spaces  ", (2, 14, 21)),
        ("line1\nline2", (2, 10, 11)),
        ("a", (1, 1, 1)),
    ];

    for (text, (words, excluding, including)) in cases {
        let stats = compute(text);
        assert_eq!(stats.word_count, words, "word count of {text:?}");
        assert_eq!(stats.letter_count_excluding_spaces, excluding, "{text:?}");
        assert_eq!(stats.letter_count_including_spaces, including, "{text:?}");
    }
}
