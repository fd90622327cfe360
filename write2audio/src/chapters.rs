//! Chapter segmentation over a flat block sequence.

use crate::block::{Chapter, ContentBlock};

/// Paragraph styles that open a new chapter.
pub const CHAPTER_START_STYLES: [&str; 3] = ["Heading1", "Title", "Titolo"];

/// Group an ordered block sequence into chapters at heading-style boundaries.
///
/// A paragraph whose style is in `chapter_styles` closes the running group;
/// groups are only emitted when they hold more than one block, so a lone
/// heading with no body is discarded, as is unheaded front matter of a single
/// block. Blank paragraphs never count as content: a zero-length heading acts
/// as a boundary only, and a zero-length body paragraph is dropped. Tables
/// and slides always append and never open or close a boundary.
pub fn segment_blocks(blocks: Vec<ContentBlock>, chapter_styles: &[&str]) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut current: Vec<ContentBlock> = Vec::new();

    for block in blocks {
        if let ContentBlock::Paragraph { style, text } = &block {
            if chapter_styles.contains(&style.as_str()) {
                if current.len() > 1 {
                    chapters.push(Chapter::new(std::mem::take(&mut current)));
                } else {
                    current.clear();
                }
            }
            if text.is_empty() {
                continue;
            }
        }
        current.push(block);
    }

    // A trailing heading with nothing after it is not a chapter.
    if current.len() > 1 {
        chapters.push(Chapter::new(current));
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> ContentBlock {
        ContentBlock::paragraph("Heading1", text)
    }

    fn para(text: &str) -> ContentBlock {
        ContentBlock::paragraph("Normal", text)
    }

    #[test]
    fn test_single_chapter() {
        let chapters = segment_blocks(
            vec![heading("Ch1"), para("hello"), para("world")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].len(), 3);
        assert_eq!(chapters[0].title(), "Ch1");
    }

    #[test]
    fn test_two_chapters() {
        let chapters = segment_blocks(
            vec![
                heading("Ch1"),
                para("one"),
                heading("Ch2"),
                para("two"),
                para("three"),
            ],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title(), "Ch1");
        assert_eq!(chapters[1].title(), "Ch2");
        assert_eq!(chapters[1].len(), 3);
    }

    #[test]
    fn test_every_chapter_has_more_than_one_block() {
        let chapters = segment_blocks(
            vec![
                heading("empty 1"),
                heading("empty 2"),
                heading("real"),
                para("body"),
                heading("trailing"),
            ],
            &CHAPTER_START_STYLES,
        );
        assert!(chapters.iter().all(|c| c.len() > 1));
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "real");
    }

    #[test]
    fn test_lone_trailing_heading_is_discarded() {
        let chapters = segment_blocks(
            vec![heading("Ch1"), para("body"), heading("orphan")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "Ch1");
    }

    #[test]
    fn test_single_block_front_matter_is_dropped() {
        let chapters = segment_blocks(
            vec![para("stray line"), heading("Ch1"), para("body")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "Ch1");
    }

    #[test]
    fn test_multi_block_front_matter_becomes_a_chapter() {
        let chapters = segment_blocks(
            vec![para("intro"), para("more intro"), heading("Ch1"), para("body")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title(), "intro");
    }

    #[test]
    fn test_blank_paragraphs_are_not_content() {
        let chapters = segment_blocks(
            vec![heading("Ch1"), para(""), para("body")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].len(), 2);
    }

    #[test]
    fn test_blank_heading_is_a_boundary_only() {
        // The empty heading closes Ch1 but contributes no block to Ch2.
        let chapters = segment_blocks(
            vec![
                heading("Ch1"),
                para("one"),
                ContentBlock::paragraph("Heading1", ""),
                para("stray"),
            ],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "Ch1");
    }

    #[test]
    fn test_tables_append_without_bounding() {
        let table = ContentBlock::Table {
            rows: vec![vec!["x".to_string()]],
        };
        let chapters = segment_blocks(
            vec![heading("Ch1"), table.clone(), heading("Ch2"), para("body")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].blocks()[1], table);
    }

    #[test]
    fn test_no_headings_yields_one_trailing_chapter() {
        let chapters = segment_blocks(
            vec![para("first"), para("second"), para("third")],
            &CHAPTER_START_STYLES,
        );
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].len(), 3);
        assert_eq!(chapters[0].title(), "first");
    }

    #[test]
    fn test_empty_input() {
        let chapters = segment_blocks(vec![], &CHAPTER_START_STYLES);
        assert!(chapters.is_empty());
    }
}
