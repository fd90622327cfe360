//! Chapter-to-text rendering with structural markers.
//!
//! Turns one chapter's blocks into a single annotated string: a spoken title
//! line, chapter-keyword lines for subheadings, numbered list items, and
//! tab-joined table rows. Keywords come from a per-language table; the
//! [`Language`] set is closed, so there is no fallback path.

use tts_client::Language;

use crate::block::{Chapter, ContentBlock};

/// Style carried by numbered list items.
pub const LIST_ITEM_STYLE: &str = "ListParagraph";
/// Style carried by in-chapter subheadings.
pub const SUBHEADING_STYLE: &str = "Heading2";

fn title_keyword(language: Language) -> &'static str {
    match language {
        Language::Italian => "TITOLO",
        Language::English => "TITLE",
    }
}

fn chapter_keyword(language: Language) -> &'static str {
    match language {
        Language::Italian => "CAPITOLO",
        Language::English => "CHAPTER",
    }
}

fn slide_keyword(language: Language) -> &'static str {
    match language {
        Language::Italian => "Slide numero",
        Language::English => "Slide number",
    }
}

/// Render one chapter into annotated plain text.
///
/// Returns the text and the chapter title. The list-item counter starts at 0
/// and resets whenever a non-list block is rendered.
pub fn render_chapter(chapter: &Chapter, language: Language) -> (String, String) {
    let title = chapter.title();
    let mut text = format!("{}: {}.\n", title_keyword(language), title);
    let mut list_idx = 0usize;
    let mut slide_idx = 0usize;

    for block in &chapter.blocks()[1..] {
        match block {
            ContentBlock::Paragraph { style, text: body } => {
                if style == LIST_ITEM_STYLE {
                    text.push_str(&format!("\t{}: {}.\n", list_idx, body));
                    list_idx += 1;
                    continue;
                }
                list_idx = 0;
                if style == SUBHEADING_STYLE {
                    text.push_str(&format!("\n.\n{}: ", chapter_keyword(language)));
                }
                text.push_str(body);
                text.push('\n');
            }
            ContentBlock::Table { rows } => {
                list_idx = 0;
                for row in rows {
                    text.push_str(&row.join("\t"));
                    text.push('\n');
                }
            }
            ContentBlock::Slide { shape_texts, notes } => {
                list_idx = 0;
                slide_idx += 1;
                text.push_str(&format!("\n\n{} {}:\n", slide_keyword(language), slide_idx));
                text.push_str(shape_texts.join("\n").trim());
                text.push('\n');
                if let Some(notes) = notes {
                    if !notes.is_empty() {
                        text.push_str(&format!("\nNote:\n{}\n", notes));
                    }
                }
            }
        }
    }

    (text, title)
}
