//! Shared text-to-speech library for the write2audio workspace
//!
//! Provides a unified interface over several speech backends:
//! - Google Translate TTS (network, chunk-limited)
//! - espeak-ng (local subprocess)
//! - macOS `say` (local subprocess)

pub mod backend;
pub mod backends;
pub mod error;
pub mod session;
pub mod voice;

pub use backend::TtsBackend;
pub use backends::{BackendKind, MockBackend, create_backend};
pub use error::{Result, TtsError};
pub use session::Synthesizer;
pub use voice::{Language, VoiceConfig};
