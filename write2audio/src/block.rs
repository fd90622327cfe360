// Content block data model shared by the document readers and the segmenter

/// A typed content block extracted from a source document, in document order.
///
/// Blocks are immutable once extracted; the segmenter consumes them read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Paragraph-like block carrying its style tag.
    Paragraph { style: String, text: String },
    /// Table flattened to rows of cell-paragraph texts, in cell order then
    /// paragraph-within-cell order.
    Table { rows: Vec<Vec<String>> },
    /// Presentation slide: one entry per text-bearing shape, plus speaker notes.
    Slide {
        shape_texts: Vec<String>,
        notes: Option<String>,
    },
}

impl ContentBlock {
    /// Convenience constructor for paragraphs.
    pub fn paragraph(style: impl Into<String>, text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            style: style.into(),
            text: text.into(),
        }
    }

    /// The text used when this block opens a chapter.
    ///
    /// Non-paragraph blocks rarely open chapters (only unheaded front matter
    /// can start with one); they fall back to their first piece of text.
    pub fn title_text(&self) -> String {
        match self {
            ContentBlock::Paragraph { text, .. } => text.clone(),
            ContentBlock::Table { rows } => rows
                .first()
                .and_then(|row| row.first())
                .cloned()
                .unwrap_or_default(),
            ContentBlock::Slide { shape_texts, .. } => {
                shape_texts.first().cloned().unwrap_or_default()
            }
        }
    }
}

/// An ordered group of blocks forming one logical chapter.
///
/// Invariant: a chapter always holds more than one block, and the first
/// block's text is the chapter title.
#[derive(Debug, Clone)]
pub struct Chapter {
    blocks: Vec<ContentBlock>,
}

impl Chapter {
    pub(crate) fn new(blocks: Vec<ContentBlock>) -> Self {
        debug_assert!(blocks.len() > 1, "a chapter needs a title and a body");
        Self { blocks }
    }

    /// The blocks of this chapter, title block first.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Number of blocks, always > 1.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The chapter title, taken from the first block.
    pub fn title(&self) -> String {
        self.blocks[0].title_text()
    }
}

/// Book-level metadata provided by the document reader.
#[derive(Debug, Clone, Default)]
pub struct BookMeta {
    pub title: Option<String>,
    pub author: Option<String>,
}
