//! PPTX reader: one `Slide` block per `ppt/slides/slideN.xml`.
//!
//! Shape texts are gathered per `p:sp` shape with paragraph breaks kept as
//! newlines; speaker notes come from the matching notes slide when present.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use super::{Document, local_name, parse_core_props, read_archive_file, resolve_entity};
use crate::block::{BookMeta, ContentBlock};

pub fn read(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut archive = ZipArchive::new(file).context("Not a valid PPTX archive")?;

    // Archive order is not presentation order; sort by slide number.
    let mut slide_names: Vec<(usize, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slide_names.sort();

    let mut blocks = Vec::new();
    for (number, name) in &slide_names {
        let xml = read_archive_file(&mut archive, name)?;
        let shape_texts = parse_shape_texts(&xml)?;

        let notes_name = format!("ppt/notesSlides/notesSlide{}.xml", number);
        let notes = match read_archive_file(&mut archive, &notes_name) {
            Ok(notes_xml) => {
                let joined = parse_shape_texts(&notes_xml)?.join("\n");
                (!joined.is_empty()).then_some(joined)
            }
            Err(_) => None,
        };

        blocks.push(ContentBlock::Slide { shape_texts, notes });
    }

    let meta = match read_archive_file(&mut archive, "docProps/core.xml") {
        Ok(core) => parse_core_props(&core)?,
        Err(_) => BookMeta::default(),
    };

    Ok(Document { blocks, meta })
}

fn slide_number(name: &str) -> Option<usize> {
    let rest = name.strip_prefix("ppt/slides/slide")?;
    let digits = rest.strip_suffix(".xml")?;
    digits.parse().ok()
}

/// Collect the text of every text-bearing shape, one entry per shape.
fn parse_shape_texts(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut shapes = Vec::new();
    let mut current = String::new();
    let mut in_shape = false;
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match local_name(e.name().as_ref()) {
                b"sp" => {
                    in_shape = true;
                    current.clear();
                }
                b"t" => in_run_text = in_shape,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_run_text {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_run_text {
                    current.push_str(resolve_entity(e.as_ref()));
                }
            }
            Ok(Event::End(e)) => match local_name(e.name().as_ref()) {
                b"t" => in_run_text = false,
                b"p" if in_shape => current.push('\n'),
                b"sp" => {
                    in_shape = false;
                    let text = current.trim().to_string();
                    if !text.is_empty() {
                        shapes.push(text);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => anyhow::bail!("Malformed slide XML: {}", e),
            _ => {}
        }
    }

    Ok(shapes)
}
