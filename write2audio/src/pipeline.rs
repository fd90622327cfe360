//! End-to-end conversion pipeline: document in, chaptered audiobook out.
//!
//! Chapters and chunks are processed strictly in document order, one awaited
//! synthesis call at a time; audio segment order must match the text, and
//! most backends are rate-limited anyway.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tts_client::{Language, Synthesizer};

use crate::audio::{assemble_audiobook, build_timeline, render_ffmetadata, synthesize_chapter};
use crate::chapters::{CHAPTER_START_STYLES, segment_blocks};
use crate::extract::{DocumentKind, read_document};
use crate::render::render_chapter;
use crate::text::clean_text;

/// Settings for one conversion run.
pub struct PipelineOptions {
    pub language: Language,
    /// AAC bitrate for the final container.
    pub bitrate: String,
    /// Chunk-size override; falls back to the backend's own limit.
    pub chunk_chars: Option<usize>,
}

/// Convert `input` into a chaptered M4B audiobook at `output_path`.
pub async fn run(
    input: &Path,
    kind: DocumentKind,
    synth: &Synthesizer,
    output_path: &Path,
    opts: &PipelineOptions,
) -> Result<()> {
    info!("reading {}", input.display());
    let document = read_document(input, kind)?;

    let chapters = segment_blocks(document.blocks, &CHAPTER_START_STYLES);
    if chapters.is_empty() {
        anyhow::bail!("No chapters found in {}", input.display());
    }
    info!("{} chapter(s) found", chapters.len());

    let max_chars = opts.chunk_chars.or(synth.max_chunk_chars());

    // Chapter clips live for the whole run, the output file survives it.
    let clip_dir = TempDir::new()?;
    let mut clip_paths: Vec<PathBuf> = Vec::new();
    let mut titles: Vec<String> = Vec::new();

    let progress = ProgressBar::new(chapters.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    for (idx, chapter) in chapters.iter().enumerate() {
        let (raw_text, title) = render_chapter(chapter, opts.language);
        let text = clean_text(&raw_text);
        debug!("chapter {} ({}) text:\n{}", idx, title, text);
        progress.set_message(title.clone());

        let clip_path = clip_dir
            .path()
            .join(format!("c{}.{}", idx, synth.file_extension()));
        if synthesize_chapter(synth, &text, &clip_path, max_chars).await? {
            clip_paths.push(clip_path);
            titles.push(title);
        } else {
            warn!(
                "chapter {} ('{}') produced no audio and is dropped from the audiobook",
                idx, title
            );
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if clip_paths.is_empty() {
        anyhow::bail!("No chapter produced any audio; nothing to assemble");
    }

    let timeline = build_timeline(&clip_paths, &titles)?;
    let metadata = render_ffmetadata(
        document.meta.title.as_deref(),
        document.meta.author.as_deref(),
        &timeline,
    );
    assemble_audiobook(&clip_paths, &metadata, output_path, &opts.bitrate)?;

    info!("wrote {}", output_path.display());
    Ok(())
}
