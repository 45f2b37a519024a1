//! Paragraph source: turns an input document into trimmed, non-empty
//! paragraphs in document order.

use std::path::Path;

use tracing::debug;

use crate::error::RepunctError;

/// Extracts paragraphs from a PDF or plain-text file.
///
/// PDF inputs go through text extraction first; anything else is read as
/// UTF-8 text. Either way the text is split on blank lines, trimmed, and
/// empty paragraphs are dropped.
pub fn extract_paragraphs(path: &Path) -> Result<Vec<String>, RepunctError> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path).map_err(|err| RepunctError::Ingest(err.to_string()))?
    } else {
        std::fs::read_to_string(path)?
    };

    let paragraphs = paragraphs_from_text(&text);
    debug!(
        path = %path.display(),
        paragraphs = paragraphs.len(),
        "extracted paragraphs"
    );
    Ok(paragraphs)
}

/// Splits raw text into trimmed, non-empty paragraphs on blank lines.
pub fn paragraphs_from_text(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn blank_line_separated_paragraphs_are_trimmed() {
        let text = "  first paragraph \n\n\n\nsecond\n\n   \n\nthird";
        let paragraphs = paragraphs_from_text(text);
        assert_eq!(paragraphs, vec!["first paragraph", "second", "third"]);
    }

    #[test]
    fn empty_text_yields_no_paragraphs() {
        assert!(paragraphs_from_text("").is_empty());
        assert!(paragraphs_from_text("\n\n\n\n").is_empty());
    }

    #[test]
    fn plain_text_files_are_read_directly() {
        let mut file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        write!(file, "alpha\n\nbeta").unwrap();
        let paragraphs = extract_paragraphs(file.path()).unwrap();
        assert_eq!(paragraphs, vec!["alpha", "beta"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = extract_paragraphs(Path::new("does-not-exist.txt"));
        assert!(result.is_err());
    }
}
