//! EPUB reader built on the `epub` crate.
//!
//! Each spine document contributes a heading paragraph (when one can be
//! found in its markup) followed by body paragraphs, so the segmenter sees
//! the same heading-style boundaries as for word-processor input.

use anyhow::Result;
use std::path::Path;

use super::{BODY_STYLE, Document, HEADING_STYLE};
use crate::block::{BookMeta, ContentBlock};

pub fn read(path: &Path) -> Result<Document> {
    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| anyhow::anyhow!("Failed to open EPUB: {}", e))?;

    let meta = BookMeta {
        title: doc.mdata("title").map(|m| m.value.clone()),
        author: doc.mdata("creator").map(|m| m.value.clone()),
    };

    let mut blocks = Vec::new();
    let spine = doc.spine.clone();

    for spine_item in spine.iter() {
        let Some((content_bytes, _mime)) = doc.get_resource(&spine_item.idref) else {
            continue;
        };
        let html = String::from_utf8_lossy(&content_bytes).to_string();

        if let Some(heading) = extract_heading(&html) {
            blocks.push(ContentBlock::paragraph(HEADING_STYLE, heading));
        }

        let text = html_to_text(&html);
        for para in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            blocks.push(ContentBlock::paragraph(BODY_STYLE, para));
        }
    }

    Ok(Document { blocks, meta })
}

/// Extract a heading from HTML content (looks for h1, then h2).
fn extract_heading(html: &str) -> Option<String> {
    let html_lower = html.to_lowercase();

    for tag in ["h1", "h2"] {
        let open = format!("<{}", tag);
        let close = format!("</{}>", tag);
        if let Some(start) = html_lower.find(&open) {
            if let Some(tag_end) = html_lower[start..].find('>') {
                let content_start = start + tag_end + 1;
                if let Some(end) = html_lower[content_start..].find(&close) {
                    let heading = strip_html_tags(&html[content_start..content_start + end]);
                    if !heading.trim().is_empty() {
                        return Some(heading.trim().to_string());
                    }
                }
            }
        }
    }

    None
}

/// Strip HTML tags from a string.
fn strip_html_tags(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    result
}

/// Convert HTML to plain text with blank-line paragraph breaks.
fn html_to_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<p>Hello</p>"), "Hello");
        assert_eq!(strip_html_tags("<a href=\"x\">Link</a>"), "Link");
    }

    #[test]
    fn test_extract_heading_prefers_h1() {
        let html = "<body><h2>Sub</h2><h1>Main</h1></body>";
        assert_eq!(extract_heading(html), Some("Main".to_string()));
    }

    #[test]
    fn test_extract_heading_falls_back_to_h2() {
        let html = "<body><h2>Section Title</h2><p>Content</p></body>";
        assert_eq!(extract_heading(html), Some("Section Title".to_string()));
    }

    #[test]
    fn test_extract_heading_none() {
        let html = "<body><p>Just text</p></body>";
        assert_eq!(extract_heading(html), None);
    }

    #[test]
    fn test_html_to_text_produces_paragraph_breaks() {
        let html = "<body><p>first</p><p>second</p></body>";
        let text = html_to_text(html);
        let paras: Vec<&str> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        assert_eq!(paras, vec!["first", "second"]);
    }
}
