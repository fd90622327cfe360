//! DOCX reader: streaming parse of `word/document.xml`.
//!
//! Yields styled paragraphs and flattened tables in document order. Styles
//! are passed through as raw `w:pStyle` IDs (`Heading1`, `ListParagraph`,
//! ...); nothing here interprets them, that is the segmenter's job.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use super::{BODY_STYLE, Document, local_name, parse_core_props, read_archive_file, resolve_entity};
use crate::block::{BookMeta, ContentBlock};

pub fn read(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut archive = ZipArchive::new(file).context("Not a valid DOCX archive")?;

    let body = read_archive_file(&mut archive, "word/document.xml")
        .context("DOCX has no word/document.xml")?;
    let blocks = parse_document_xml(&body)?;

    let meta = match read_archive_file(&mut archive, "docProps/core.xml") {
        Ok(core) => parse_core_props(&core)?,
        Err(_) => BookMeta::default(),
    };

    Ok(Document { blocks, meta })
}

fn parse_document_xml(xml: &str) -> Result<Vec<ContentBlock>> {
    let mut reader = Reader::from_str(xml);

    let mut blocks = Vec::new();

    let mut in_table = false;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();

    // Paragraph state, used both at body level and inside table cells.
    let mut in_paragraph = false;
    let mut in_run_text = false;
    let mut para_style = String::new();
    let mut para_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match local_name(e.name().as_ref()) {
                b"tbl" => {
                    in_table = true;
                    rows.clear();
                }
                b"tr" => row.clear(),
                b"p" => {
                    in_paragraph = true;
                    para_style.clear();
                    para_text.clear();
                }
                b"t" => in_run_text = in_paragraph,
                b"pStyle" => para_style = style_attribute(&e),
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if local_name(e.name().as_ref()) == b"pStyle" {
                    para_style = style_attribute(&e);
                }
            }
            Ok(Event::Text(e)) => {
                if in_run_text {
                    para_text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_run_text {
                    para_text.push_str(resolve_entity(e.as_ref()));
                }
            }
            Ok(Event::End(e)) => match local_name(e.name().as_ref()) {
                b"t" => in_run_text = false,
                b"p" => {
                    in_paragraph = false;
                    if in_table {
                        // One tab slot per cell paragraph, cell order then
                        // paragraph-within-cell order.
                        row.push(std::mem::take(&mut para_text));
                        para_style.clear();
                    } else {
                        let style = if para_style.is_empty() {
                            BODY_STYLE.to_string()
                        } else {
                            std::mem::take(&mut para_style)
                        };
                        blocks.push(ContentBlock::Paragraph {
                            style,
                            text: std::mem::take(&mut para_text),
                        });
                    }
                }
                b"tr" => rows.push(std::mem::take(&mut row)),
                b"tbl" => {
                    in_table = false;
                    blocks.push(ContentBlock::Table {
                        rows: std::mem::take(&mut rows),
                    });
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => anyhow::bail!("Malformed document.xml: {}", e),
            _ => {}
        }
    }

    Ok(blocks)
}

fn style_attribute(e: &BytesStart<'_>) -> String {
    for attr in e.attributes().flatten() {
        if local_name(attr.key.as_ref()) == b"val" {
            return String::from_utf8_lossy(&attr.value).to_string();
        }
    }
    String::new()
}
