//! Chunk-builder properties and the concrete boundary-walk scenario.

use proptest::prelude::*;

use repunct::build_chunks;
use repunct::chunking::PARAGRAPH_SEPARATOR;

/// Paragraph bodies mixing ASCII, CJK, and both boundary delimiters.
/// No whitespace: paragraph sources hand the builder trimmed text.
fn paragraph_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9。；天地玄黄宇宙]{1,60}").unwrap()
}

proptest! {
    #[test]
    fn every_chunk_respects_the_budget(
        paragraphs in prop::collection::vec(paragraph_strategy(), 0..12),
        chunk_size in 1usize..40,
    ) {
        let chunks = build_chunks(&paragraphs, chunk_size);
        for chunk in &chunks {
            // Sub-chunks of oversized paragraphs are cut at or before the
            // window edge, and merges count the separator, so the budget
            // holds for every chunk.
            prop_assert!(chunk.chars().count() <= chunk_size);
        }
    }

    #[test]
    fn reassembly_is_lossless_and_ordered(
        paragraphs in prop::collection::vec(paragraph_strategy(), 0..12),
        chunk_size in 1usize..40,
    ) {
        let chunks = build_chunks(&paragraphs, chunk_size);
        let reassembled: String = chunks.concat().replace(PARAGRAPH_SEPARATOR, "");
        prop_assert_eq!(reassembled, paragraphs.concat());
    }

    #[test]
    fn non_empty_input_yields_at_least_one_chunk(
        paragraphs in prop::collection::vec(paragraph_strategy(), 1..12),
        chunk_size in 1usize..40,
    ) {
        prop_assert!(!build_chunks(&paragraphs, chunk_size).is_empty());
    }
}

#[test]
fn boundary_search_restarts_each_window() {
    // chunk_size 5 over an 11-char paragraph: hard cut, then the stranded
    // period becomes its own sub-chunk, then the in-budget remainder.
    let chunks = build_chunks(["abcde。fghij"], 5);
    assert_eq!(chunks, vec!["abcde", "。", "fghij"]);
    assert_eq!(chunks.concat(), "abcde。fghij");
}

#[test]
fn fitting_paragraph_is_never_split() {
    let chunks = build_chunks(["ab。cd。ef"], 10);
    assert_eq!(chunks, vec!["ab。cd。ef"]);
}
