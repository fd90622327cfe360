//! Chapter audio assembly and final muxing via FFmpeg.

use anyhow::{Context, Result};
use log::warn;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;
use tts_client::Synthesizer;

use crate::text::split_into_chunks;

/// Fixed backoff before the single retry on a transient synthesis error.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

fn ffmpeg_command() -> Command {
    Command::new("ffmpeg")
}

fn ffprobe_command() -> Command {
    Command::new("ffprobe")
}

/// Get duration of an audio file in nanoseconds using ffprobe.
pub fn probe_duration_ns(audio_path: &Path) -> Result<u64> {
    let output = ffprobe_command()
        .args([
            "-v",
            "quiet",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(audio_path)
        .output()
        .context("Failed to run ffprobe")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffprobe failed: {}", stderr);
    }

    let duration_str = String::from_utf8_lossy(&output.stdout);
    let duration_secs: f64 = duration_str
        .trim()
        .parse()
        .context("Failed to parse duration")?;

    // Integer nanoseconds from here on; summing per-chapter floats drifts
    // over a long book.
    Ok((duration_secs * 1e9) as u64)
}

/// Concatenate same-format clips into one file.
///
/// Uses FFmpeg's concat demuxer for lossless concatenation; a single input
/// is plain-copied without spawning FFmpeg at all.
pub fn concatenate_clips(clips: &[PathBuf], output_path: &Path) -> Result<()> {
    if clips.is_empty() {
        anyhow::bail!("No audio clips provided");
    }

    if clips.len() == 1 {
        std::fs::copy(&clips[0], output_path)?;
        return Ok(());
    }

    let temp_dir = TempDir::new()?;
    let list_file = temp_dir.path().join("concat_list.txt");

    let mut list_content = String::new();
    for path in clips {
        // Escape single quotes in path
        let path_str = path.to_string_lossy().replace('\'', "'\\''");
        list_content.push_str(&format!("file '{}'\n", path_str));
    }
    std::fs::write(&list_file, &list_content)?;

    let output = ffmpeg_command()
        .args(["-y", "-f", "concat", "-safe", "0", "-i"])
        .arg(&list_file)
        .args(["-c", "copy"])
        .arg(output_path)
        .output()
        .context("Failed to run ffmpeg concat")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg concat failed: {}", stderr);
    }

    Ok(())
}

/// Synthesize one chapter's text into `out_path`.
///
/// The text is chunked when `max_chars` is set; a single chunk goes straight
/// to the target path with no temp file or concat step. Failed chunks are
/// skipped (after one retry for transient errors) and their audio is simply
/// missing from the chapter.
///
/// Returns `false` when no chunk produced usable audio; the caller must then
/// leave the chapter out of the timeline entirely.
pub async fn synthesize_chapter(
    synth: &Synthesizer,
    text: &str,
    out_path: &Path,
    max_chars: Option<usize>,
) -> Result<bool> {
    if text.trim().is_empty() {
        return Ok(false);
    }

    let chunks = match max_chars {
        Some(max) => split_into_chunks(text, max),
        None => vec![text.to_string()],
    };

    if chunks.len() == 1 {
        return Ok(synthesize_chunk(synth, &chunks[0], out_path).await);
    }

    // All chunk clips live in one scope, released however assembly ends.
    let temp_dir = TempDir::new()?;
    let mut clips = Vec::with_capacity(chunks.len());
    for (idx, chunk) in chunks.iter().enumerate() {
        let clip_path = temp_dir
            .path()
            .join(format!("chunk{:04}.{}", idx, synth.file_extension()));
        if synthesize_chunk(synth, chunk, &clip_path).await {
            clips.push(clip_path);
        }
    }

    if clips.is_empty() {
        return Ok(false);
    }

    concatenate_clips(&clips, out_path)?;
    Ok(true)
}

/// Synthesize a single chunk, retrying once on a transient failure.
async fn synthesize_chunk(synth: &Synthesizer, chunk: &str, out_path: &Path) -> bool {
    match synth.synthesize(chunk, out_path).await {
        Ok(()) => true,
        Err(err) if err.is_transient() => {
            warn!("transient synthesis error, retrying once: {}", err);
            tokio::time::sleep(RETRY_BACKOFF).await;
            match synth.synthesize(chunk, out_path).await {
                Ok(()) => true,
                Err(err) => {
                    warn!("chunk skipped after retry: {}", err);
                    false
                }
            }
        }
        Err(err) => {
            warn!("chunk skipped: {}", err);
            false
        }
    }
}

/// Concatenate the chapter clips and mux them with the ffmetadata blob into
/// the final audiobook container.
///
/// A failed encode propagates with FFmpeg's captured stderr. Partial output
/// files are left on disk; removing them is the caller's call.
pub fn assemble_audiobook(
    chapter_paths: &[PathBuf],
    ffmetadata: &str,
    output_path: &Path,
    bitrate: &str,
) -> Result<()> {
    if chapter_paths.is_empty() {
        anyhow::bail!("No chapter audio to assemble");
    }

    let temp_dir = TempDir::new()?;

    let ext = chapter_paths[0]
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("mp3");
    let joined = temp_dir.path().join(format!("joined.{}", ext));
    concatenate_clips(chapter_paths, &joined)?;

    let metadata_file = temp_dir.path().join("ffmetadata.txt");
    std::fs::write(&metadata_file, ffmetadata)?;

    // The explicit -f matters: a metadata file with no ;FFMETADATA1 header
    // (no book title/author) cannot be sniffed.
    let output = ffmpeg_command()
        .args(["-y", "-i"])
        .arg(&joined)
        .args(["-f", "ffmetadata", "-i"])
        .arg(&metadata_file)
        .args(["-map", "0:a", "-map_metadata", "1", "-c:a", "aac", "-b:a", bitrate, "-f", "mp4"])
        .arg(output_path)
        .output()
        .context("Failed to run ffmpeg mux")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg audiobook assembly failed: {}", stderr);
    }

    Ok(())
}
