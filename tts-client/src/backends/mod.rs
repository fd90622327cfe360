//! Speech backend implementations

mod espeak;
mod google;
pub mod mock;
mod say;

pub use espeak::EspeakBackend;
pub use google::{GOOGLE_TTS_MAX_CHARS, GoogleTranslateBackend};
pub use mock::MockBackend;
pub use say::SayBackend;

use crate::backend::TtsBackend;
use crate::error::{Result, TtsError};

/// Supported backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    GoogleTranslate,
    Espeak,
    Say,
}

impl BackendKind {
    /// Parse backend kind from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" | "gtts" | "google-translate" => Ok(Self::GoogleTranslate),
            "espeak" | "espeak-ng" => Ok(Self::Espeak),
            "say" => Ok(Self::Say),
            _ => Err(TtsError::UnknownBackend(s.to_string())),
        }
    }

    /// Default backend for the current platform: `say` on macOS, the network
    /// backend on Windows, espeak everywhere else.
    pub fn default_for_platform() -> Self {
        if cfg!(target_os = "macos") {
            Self::Say
        } else if cfg!(target_os = "windows") {
            Self::GoogleTranslate
        } else {
            Self::Espeak
        }
    }
}

/// Create a backend instance. Selection happens exactly once, at startup;
/// the pipeline only ever sees the trait object.
pub fn create_backend(kind: BackendKind) -> Result<Box<dyn TtsBackend>> {
    match kind {
        BackendKind::GoogleTranslate => Ok(Box::new(GoogleTranslateBackend::new()?)),
        BackendKind::Espeak => Ok(Box::new(EspeakBackend::new(None)?)),
        BackendKind::Say => Ok(Box::new(SayBackend::new()?)),
    }
}
