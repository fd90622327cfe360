//! Plain-text reader: blank-line separated paragraphs.

use anyhow::{Context, Result};
use std::path::Path;

use super::{BODY_STYLE, Document};
use crate::block::{BookMeta, ContentBlock};

pub fn read(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let blocks = raw
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| ContentBlock::paragraph(BODY_STYLE, p))
        .collect();

    Ok(Document {
        blocks,
        meta: BookMeta::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let file = write_temp("first paragraph\n\nsecond\nstill second\n\nthird");
        let doc = read(file.path()).unwrap();
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(
            doc.blocks[1],
            ContentBlock::paragraph(BODY_STYLE, "second\nstill second")
        );
    }

    #[test]
    fn test_crlf_input() {
        let file = write_temp("one\r\n\r\ntwo");
        let doc = read(file.path()).unwrap();
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read(Path::new("/nonexistent/input.txt")).is_err());
    }
}
