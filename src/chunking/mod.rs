//! Chunk builder: merges paragraphs into budgeted, boundary-safe chunks.
//!
//! Paragraphs are packed greedily into an accumulator joined by blank lines
//! until the next paragraph would overflow the budget. Paragraphs that are
//! themselves over budget bypass the accumulator and are split on sentence
//! and clause boundaries instead (see [`split`]).

mod split;

pub use split::{BOUNDARY_DELIMITERS, split_oversized, split_with_delimiters};

/// Separator inserted between paragraphs that share a chunk.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Builds an ordered sequence of chunks, each at most `chunk_size` chars.
///
/// The separator counts toward the budget when deciding whether a paragraph
/// still fits the accumulating chunk, so merged chunks respect the budget
/// strictly; sub-chunks of oversized paragraphs are cut at or before the
/// window edge and stay within it as well.
///
/// Concatenating all returned chunks, ignoring inserted separators,
/// reproduces the input paragraphs in order with no loss.
///
/// `chunk_size` must be at least 1; validate via
/// [`RunConfig::validate`](crate::config::RunConfig::validate) first.
pub fn build_chunks<I>(paragraphs: I, chunk_size: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    debug_assert!(chunk_size >= 1, "chunk_size must be validated upstream");

    let separator_len = PARAGRAPH_SEPARATOR.chars().count();
    let mut chunks = Vec::new();
    let mut accumulator = String::new();
    let mut accumulator_len = 0usize;

    for paragraph in paragraphs {
        let paragraph = paragraph.as_ref();
        let paragraph_len = paragraph.chars().count();

        if paragraph_len > chunk_size {
            if !accumulator.is_empty() {
                chunks.push(std::mem::take(&mut accumulator));
                accumulator_len = 0;
            }
            chunks.extend(split_oversized(paragraph, chunk_size));
            continue;
        }

        let joined_len = if accumulator.is_empty() {
            paragraph_len
        } else {
            accumulator_len + separator_len + paragraph_len
        };

        if joined_len <= chunk_size {
            if !accumulator.is_empty() {
                accumulator.push_str(PARAGRAPH_SEPARATOR);
            }
            accumulator.push_str(paragraph);
            accumulator_len = joined_len;
        } else {
            chunks.push(std::mem::take(&mut accumulator));
            accumulator.push_str(paragraph);
            accumulator_len = paragraph_len;
        }
    }

    if !accumulator.is_empty() {
        chunks.push(accumulator);
    }

    chunks
}
