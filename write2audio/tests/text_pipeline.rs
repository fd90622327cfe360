//! End-to-end coverage of the text path: read, segment, render, chunk, and
//! synthesize chapter audio against the mock backend. The FFmpeg-backed
//! probe/concat/mux steps are exercised by integration runs, not here.

use std::io::Write;
use tts_client::{Language, MockBackend, Synthesizer, TtsError, VoiceConfig};
use write2audio::audio::synthesize_chapter;
use write2audio::block::ContentBlock;
use write2audio::chapters::{CHAPTER_START_STYLES, segment_blocks};
use write2audio::extract::{DocumentKind, read_document};
use write2audio::render::render_chapter;
use write2audio::text::{clean_text, split_into_chunks};

#[test]
fn txt_document_flows_through_segmentation_and_rendering() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Ch1\n\nhello\n\nworld").unwrap();

    let document = read_document(file.path(), DocumentKind::Txt).unwrap();
    assert_eq!(document.blocks.len(), 3);

    // Plain text has no heading styles: everything lands in one chapter
    // titled by the first paragraph.
    let chapters = segment_blocks(document.blocks, &CHAPTER_START_STYLES);
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title(), "Ch1");

    let (text, title) = render_chapter(&chapters[0], Language::Italian);
    assert_eq!(title, "Ch1");
    assert_eq!(text, "TITOLO: Ch1.\nhello\nworld\n");
}

#[test]
fn rendered_text_chunks_within_backend_limits() {
    let chapters = segment_blocks(
        vec![
            ContentBlock::paragraph("Heading1", "Ch1"),
            ContentBlock::paragraph("Normal", "aaaa bbbb"),
            ContentBlock::paragraph("Normal", "cccc"),
        ],
        &CHAPTER_START_STYLES,
    );
    let (text, _) = render_chapter(&chapters[0], Language::English);
    let cleaned = clean_text(&text);

    let chunks = split_into_chunks(&cleaned, 15);
    assert!(chunks.len() > 1);
    for chunk in &chunks[..chunks.len() - 1] {
        assert!(chunk.chars().count() <= 15);
    }
    assert_eq!(chunks.join(" "), cleaned);
}

#[tokio::test]
async fn chapter_synthesis_writes_the_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chapter.wav");
    let synth = Synthesizer::with_backend(
        Box::new(MockBackend::always_succeeds()),
        VoiceConfig::new(Language::English),
    );

    let produced = synthesize_chapter(&synth, "TITLE: Ch1.\nhello", &out, None)
        .await
        .unwrap();
    assert!(produced);
    // The mock writes its input text as the clip payload.
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "TITLE: Ch1.\nhello"
    );
}

#[tokio::test]
async fn failing_chapter_is_reported_as_unusable() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chapter.wav");
    let synth = Synthesizer::with_backend(
        Box::new(MockBackend::always_fails(TtsError::EngineFailed(
            "no engine".into(),
        ))),
        VoiceConfig::new(Language::English),
    );

    let produced = synthesize_chapter(&synth, "some text", &out, None)
        .await
        .unwrap();
    assert!(!produced);
    assert!(!out.exists());
}
