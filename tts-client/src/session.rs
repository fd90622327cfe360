//! Synthesis session: one backend, one voice, one run.
//!
//! The session object replaces any process-wide synthesizer state. It is
//! created once at startup, passed by reference through the pipeline, and
//! torn down when the run ends.

use std::path::Path;

use crate::backend::TtsBackend;
use crate::backends::{BackendKind, create_backend};
use crate::error::Result;
use crate::voice::VoiceConfig;

/// A resolved synthesizer bound to a voice for the duration of a run.
pub struct Synthesizer {
    backend: Box<dyn TtsBackend>,
    voice: VoiceConfig,
}

impl Synthesizer {
    /// Resolve the backend for `kind` and bind it to `voice`.
    ///
    /// Fails fast if the backend cannot run (missing engine binary, etc.),
    /// so no document work is wasted on a dead synthesizer.
    pub fn new(kind: BackendKind, voice: VoiceConfig) -> Result<Self> {
        let backend = create_backend(kind)?;
        backend.is_available()?;
        Ok(Self { backend, voice })
    }

    /// Wrap an already-built backend. Used by tests with the mock backend.
    pub fn with_backend(backend: Box<dyn TtsBackend>, voice: VoiceConfig) -> Self {
        Self { backend, voice }
    }

    /// Render one piece of text into `out_path` with the session voice.
    pub async fn synthesize(&self, text: &str, out_path: &Path) -> Result<()> {
        self.backend.synthesize(text, &self.voice, out_path).await
    }

    /// Name of the underlying backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// The session's voice parameters.
    pub fn voice(&self) -> &VoiceConfig {
        &self.voice
    }

    /// Per-call text limit of the underlying backend, if any.
    pub fn max_chunk_chars(&self) -> Option<usize> {
        self.backend.max_chunk_chars()
    }

    /// Audio file extension produced by the underlying backend.
    pub fn file_extension(&self) -> &'static str {
        self.backend.file_extension()
    }
}
