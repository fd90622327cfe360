//! Document readers: thin wrappers yielding typed content blocks.
//!
//! Each reader walks its format in document order and emits
//! [`ContentBlock`]s plus book-level metadata. No reader interprets the
//! blocks; chaptering and rendering happen downstream.

mod docx;
mod epub;
mod pptx;
mod txt;

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read as _;
use std::path::Path;
use zip::ZipArchive;

use crate::block::{BookMeta, ContentBlock};

/// Style tag given to plain body paragraphs by readers without native styles.
pub const BODY_STYLE: &str = "Normal";
/// Style tag given to headings synthesized by the EPUB reader.
pub const HEADING_STYLE: &str = "Heading1";

/// Supported source document types, one per entry-point binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    Epub,
    Pptx,
    Txt,
}

/// Extracted document: ordered blocks plus book-level metadata.
#[derive(Debug)]
pub struct Document {
    pub blocks: Vec<ContentBlock>,
    pub meta: BookMeta,
}

/// Read `path` with the reader for `kind`.
pub fn read_document(path: &Path, kind: DocumentKind) -> Result<Document> {
    match kind {
        DocumentKind::Docx => docx::read(path),
        DocumentKind::Epub => epub::read(path),
        DocumentKind::Pptx => pptx::read(path),
        DocumentKind::Txt => txt::read(path),
    }
}

/// Element name with any namespace prefix stripped.
pub(crate) fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve the predefined XML entity references (&amp; &lt; ...).
pub(crate) fn resolve_entity(name: &[u8]) -> &'static str {
    match name {
        b"apos" => "'",
        b"quot" => "\"",
        b"lt" => "<",
        b"gt" => ">",
        b"amp" => "&",
        _ => "",
    }
}

/// Read one archive member into a string.
pub(crate) fn read_archive_file(archive: &mut ZipArchive<File>, name: &str) -> Result<String> {
    let mut entry = archive
        .by_name(name)
        .with_context(|| format!("archive member {} not found", name))?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

/// Extract Dublin Core title/creator from an OOXML `docProps/core.xml`.
pub(crate) fn parse_core_props(xml: &str) -> Result<BookMeta> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = BookMeta::default();
    let mut current: Option<&'static str> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                current = match local_name(e.name().as_ref()) {
                    b"title" => Some("title"),
                    b"creator" => Some("creator"),
                    _ => None,
                };
            }
            Ok(Event::Text(e)) => {
                if let Some(field) = current {
                    let value = String::from_utf8_lossy(e.as_ref()).to_string();
                    match field {
                        "title" => meta.title = Some(value),
                        _ => meta.author = Some(value),
                    }
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(field) = current {
                    let resolved = resolve_entity(e.as_ref());
                    let slot = match field {
                        "title" => &mut meta.title,
                        _ => &mut meta.author,
                    };
                    match slot {
                        Some(existing) => existing.push_str(resolved),
                        None => *slot = Some(resolved.to_string()),
                    }
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Err(e) => anyhow::bail!("Malformed core.xml: {}", e),
            _ => {}
        }
    }

    Ok(meta)
}
