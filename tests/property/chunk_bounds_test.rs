//! Property-based tests for read-aloud chunking.
//!
//! Every chunk is non-empty and within the limit, and chunking never drops or
//! reorders text.

use accessibility_widget::services::text_chunker::{chunk_blocks, chunk_text};
use proptest::prelude::*;

/// Words drawn from Romanian-ish text, with sentence punctuation and the odd
/// very long token.
fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zăâîșț]{1,9}",
        2 => "[A-ZȘȚ][a-z]{0,6}[.!?…]",
        1 => "[a-z]{30,60}",
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec((arb_word(), prop_oneof![Just(" "), Just("  "), Just("\n")]), 0..60)
        .prop_map(|parts| parts.into_iter().map(|(w, sep)| format!("{}{}", w, sep)).collect())
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn chunks_are_bounded_and_non_empty(text in arb_text(), max in 1..120usize) {
        for chunk in chunk_text(&text, max) {
            prop_assert!(!chunk.trim().is_empty());
            prop_assert!(chunk.chars().count() <= max, "{:?} exceeds {}", chunk, max);
        }
    }

    #[test]
    fn chunking_preserves_text(blocks in prop::collection::vec(arb_text(), 0..5), max in 1..120usize) {
        let chunks = chunk_blocks(&blocks, max);
        let original: String = blocks.iter().map(|b| without_whitespace(b)).collect();
        let rebuilt: String = chunks.iter().map(|c| without_whitespace(c)).collect();
        prop_assert_eq!(rebuilt, original);
    }

    #[test]
    fn short_text_is_single_chunk(word in "[A-Za-zăâîșț]{1,20}( [a-zăâîșț]{1,20}){0,3}") {
        prop_assert_eq!(chunk_text(&word, 200), vec![word.clone()]);
    }
}
