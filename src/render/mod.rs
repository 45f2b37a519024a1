//! Output renderers: pure presentation over the processed chunk sequence.

mod markdown;
mod text;

pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use crate::pipeline::ProcessedChunk;

/// Serializes the processed chunk sequence into one target format.
///
/// Renderers only reformat line breaks and indentation; they never alter
/// chunk content or order. Each run invokes a renderer at most once, after
/// the pipeline completes.
pub trait Renderer {
    fn render(&self, chunks: &[ProcessedChunk]) -> String;
}
