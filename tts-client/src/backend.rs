use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::voice::VoiceConfig;

/// Trait for speech synthesis backends.
///
/// A backend renders one piece of text into one audio file. Length limits,
/// retry classification, and output format are backend properties; assembling
/// chunked audio back into chapters is the caller's job.
#[async_trait]
pub trait TtsBackend: Send + Sync {
    /// Render `text` as speech into `out_path`.
    async fn synthesize(&self, text: &str, voice: &VoiceConfig, out_path: &Path) -> Result<()>;

    /// Backend name for display.
    fn name(&self) -> &'static str;

    /// Check the backend can run (engine binary installed, etc.).
    fn is_available(&self) -> Result<()>;

    /// Maximum text length per synthesis call, in characters, if the backend
    /// has one. `None` means a whole chapter can go through in one call.
    fn max_chunk_chars(&self) -> Option<usize> {
        None
    }

    /// Extension of the audio files this backend writes.
    fn file_extension(&self) -> &'static str;
}
