//! Boundary-safe splitting of paragraphs that exceed the chunk budget.
//!
//! Splitting prefers semantically safe cut points: the last full-stop
//! terminator inside the current window, then the last clause terminator,
//! and only then a hard cut at the window edge. All offsets are in chars;
//! the delimiters are multi-byte so byte slicing would tear them apart.

/// Cut-point candidates in priority order: sentence end first, clause end
/// second. Extending this list changes the preference, not the algorithm.
pub const BOUNDARY_DELIMITERS: [char; 2] = ['。', '；'];

/// Splits `paragraph` into sub-chunks of at most `chunk_size` chars using
/// the default delimiter set.
///
/// Concatenating the returned sub-chunks reproduces `paragraph` exactly.
/// Callers are expected to invoke this only for paragraphs longer than the
/// budget, but a short paragraph simply comes back as a single sub-chunk.
pub fn split_oversized(paragraph: &str, chunk_size: usize) -> Vec<String> {
    split_with_delimiters(paragraph, chunk_size, &BOUNDARY_DELIMITERS)
}

/// Splits `paragraph` with an explicit, priority-ordered delimiter set.
///
/// Each iteration looks at the window `[start, start + chunk_size)`. The
/// first delimiter that occurs anywhere in the window wins, and the cut
/// lands immediately after its last occurrence. A window containing none of
/// the delimiters gets a hard cut at the window edge. When the remainder
/// fits the budget it is emitted as the final sub-chunk without a search.
///
/// The cut for lower-priority delimiters is best-effort relative to the
/// window position; it is not re-checked against content carried from
/// earlier windows.
pub fn split_with_delimiters(
    paragraph: &str,
    chunk_size: usize,
    delimiters: &[char],
) -> Vec<String> {
    debug_assert!(chunk_size >= 1, "chunk_size must be validated upstream");

    let chars: Vec<char> = paragraph.chars().collect();
    let mut sub_chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = start + chunk_size;
        if end >= chars.len() {
            sub_chunks.push(chars[start..].iter().collect());
            break;
        }

        let window = &chars[start..end];
        let cut = delimiters
            .iter()
            .find_map(|&delimiter| rposition(window, delimiter))
            .map(|offset| start + offset + 1)
            .unwrap_or(end);

        sub_chunks.push(chars[start..cut].iter().collect());
        start = cut;
    }

    sub_chunks
}

fn rposition(window: &[char], needle: char) -> Option<usize> {
    window.iter().rposition(|&c| c == needle)
}
