//! Plain-text renderer with full-width indentation.

use super::Renderer;
use crate::pipeline::ProcessedChunk;

/// Two full-width spaces, the conventional first-line indent for Chinese
/// prose.
const INDENT: &str = "　　";

/// Renders chunks as indented plain text, blank lines between chunks.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, chunks: &[ProcessedChunk]) -> String {
        chunks
            .iter()
            .map(|chunk| indent_lines(&chunk.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn indent_lines(chunk: &str) -> String {
    chunk
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
