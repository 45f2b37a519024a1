//! Markdown renderer: chunk lines become Markdown paragraphs.

use super::Renderer;
use crate::pipeline::ProcessedChunk;

/// Renders every non-blank line of every chunk as its own Markdown
/// paragraph, preserving document order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, chunks: &[ProcessedChunk]) -> String {
        let paragraphs: Vec<&str> = chunks
            .iter()
            .flat_map(|chunk| chunk.text.split('\n'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        paragraphs.join("\n\n")
    }
}
