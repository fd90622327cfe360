//! Chapter timeline computation and ffmetadata serialization.

use anyhow::Result;
use std::path::PathBuf;

use super::assembler::probe_duration_ns;

/// One chapter's span on the audiobook timeline, in nanoseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTimestamp {
    pub start_ns: u64,
    pub end_ns: u64,
    pub title: String,
}

/// Compute contiguous chapter spans from an ordered duration list.
///
/// `start[0] == 0`, `end[i] == start[i] + duration[i]`, and each chapter
/// starts exactly where the previous one ends. Offsets are accumulated as
/// integers so a long book cannot drift. When `titles` is empty every
/// chapter gets a synthetic `c<index>` label instead.
pub fn timeline_from_durations(durations_ns: &[u64], titles: &[String]) -> Vec<ChapterTimestamp> {
    let mut spans = Vec::with_capacity(durations_ns.len());
    let mut cursor: u64 = 0;

    for (idx, duration) in durations_ns.iter().enumerate() {
        let title = if titles.is_empty() {
            format!("c{}", idx)
        } else {
            titles[idx].clone()
        };
        let end = cursor + duration;
        spans.push(ChapterTimestamp {
            start_ns: cursor,
            end_ns: end,
            title,
        });
        cursor = end;
    }

    spans
}

/// Probe each clip's own duration metadata and build the chapter timeline.
pub fn build_timeline(clip_paths: &[PathBuf], titles: &[String]) -> Result<Vec<ChapterTimestamp>> {
    let mut durations = Vec::with_capacity(clip_paths.len());
    for path in clip_paths {
        durations.push(probe_duration_ns(path)?);
    }
    Ok(timeline_from_durations(&durations, titles))
}

/// Render book and chapter metadata in ffmpeg's ffmetadata grammar.
///
/// The `;FFMETADATA1` header appears only when a title or an author is
/// present (empty strings count as absent). Chapter START/END are integer
/// nanoseconds, ffmpeg's default timebase when none is declared.
pub fn render_ffmetadata(
    title: Option<&str>,
    author: Option<&str>,
    chapters: &[ChapterTimestamp],
) -> String {
    let title = title.filter(|s| !s.is_empty());
    let author = author.filter(|s| !s.is_empty());

    let mut metadata = String::new();
    if title.is_some() || author.is_some() {
        metadata.push_str(";FFMETADATA1\n");
        if let Some(author) = author {
            metadata.push_str(&format!("artist={}\n", escape_metadata_value(author)));
        }
        if let Some(title) = title {
            metadata.push_str(&format!("title={}\n", escape_metadata_value(title)));
        }
    }

    for chapter in chapters {
        metadata.push_str(&format!(
            "[CHAPTER]\nSTART={}\nEND={}\ntitle={}\n",
            chapter.start_ns,
            chapter.end_ns,
            escape_metadata_value(&chapter.title)
        ));
    }

    metadata
}

/// Escape special characters in metadata values.
///
/// The ffmetadata grammar reserves `=`, `;`, `#`, `\` and newlines.
fn escape_metadata_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '=' | ';' | '#' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }

    escaped
}
