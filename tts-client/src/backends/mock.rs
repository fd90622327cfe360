//! Mock TTS backend for testing
//!
//! Configurable test double that can simulate transient failures, terminal
//! failures, and successful synthesis (it writes a small placeholder file).

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::backend::TtsBackend;
use crate::error::{Result, TtsError};
use crate::voice::VoiceConfig;

/// A mock backend for testing retry and skip behavior.
pub struct MockBackend {
    /// Number of times to fail before succeeding (0 = always succeed)
    fail_count: AtomicUsize,
    /// Current call count, shared so callers can keep a handle after boxing
    call_count: Arc<AtomicUsize>,
    /// Error to return on failure (None = always succeed)
    fail_with: Mutex<Option<TtsError>>,
    /// Advertised per-call text limit
    max_chunk_chars: Option<usize>,
}

impl MockBackend {
    /// Create a backend that fails `n` times with the given error, then succeeds.
    pub fn fails_then_succeeds(n: usize, error: TtsError) -> Self {
        Self {
            fail_count: AtomicUsize::new(n),
            call_count: Arc::new(AtomicUsize::new(0)),
            fail_with: Mutex::new(Some(error)),
            max_chunk_chars: None,
        }
    }

    /// Create a backend that always fails with the given error.
    pub fn always_fails(error: TtsError) -> Self {
        Self {
            fail_count: AtomicUsize::new(usize::MAX),
            call_count: Arc::new(AtomicUsize::new(0)),
            fail_with: Mutex::new(Some(error)),
            max_chunk_chars: None,
        }
    }

    /// Create a backend that always succeeds.
    pub fn always_succeeds() -> Self {
        Self {
            fail_count: AtomicUsize::new(0),
            call_count: Arc::new(AtomicUsize::new(0)),
            fail_with: Mutex::new(None),
            max_chunk_chars: None,
        }
    }

    /// Advertise a per-call text limit, forcing callers to chunk.
    pub fn with_max_chunk_chars(mut self, max: usize) -> Self {
        self.max_chunk_chars = Some(max);
        self
    }

    /// Get the number of times synthesize() was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, usable after the backend is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl TtsBackend for MockBackend {
    async fn synthesize(&self, text: &str, _voice: &VoiceConfig, out_path: &Path) -> Result<()> {
        let call_num = self.call_count.fetch_add(1, Ordering::SeqCst);
        let fail_count = self.fail_count.load(Ordering::SeqCst);

        if call_num < fail_count {
            let error = self.fail_with.lock().unwrap();
            if let Some(err) = error.as_ref() {
                return Err(clone_error(err));
            }
        }

        // Placeholder payload so callers can observe a file on disk.
        std::fs::write(out_path, text.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_available(&self) -> Result<()> {
        Ok(())
    }

    fn max_chunk_chars(&self) -> Option<usize> {
        self.max_chunk_chars
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }
}

/// Clone a TtsError (needed because TtsError doesn't implement Clone).
fn clone_error(err: &TtsError) -> TtsError {
    match err {
        TtsError::BackendUnavailable(s) => TtsError::BackendUnavailable(s.clone()),
        TtsError::UnknownBackend(s) => TtsError::UnknownBackend(s.clone()),
        TtsError::RateLimited { retry_after } => TtsError::RateLimited {
            retry_after: *retry_after,
        },
        TtsError::ServiceError {
            message,
            status_code,
        } => TtsError::ServiceError {
            message: message.clone(),
            status_code: *status_code,
        },
        TtsError::Network(s) => TtsError::Network(s.clone()),
        TtsError::EngineFailed(s) => TtsError::EngineFailed(s.clone()),
        TtsError::EmptyText => TtsError::EmptyText,
        // IO errors can't be cloned; degrade to a generic engine failure
        TtsError::Io(_) => TtsError::EngineFailed("IO error (mock)".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::Language;

    fn voice() -> VoiceConfig {
        VoiceConfig::new(Language::English)
    }

    #[tokio::test]
    async fn test_always_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.wav");
        let backend = MockBackend::always_succeeds();

        backend.synthesize("hello", &voice(), &out).await.unwrap();
        assert!(out.is_file());
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_always_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.wav");
        let backend = MockBackend::always_fails(TtsError::EngineFailed("boom".into()));

        for _ in 0..3 {
            assert!(backend.synthesize("hello", &voice(), &out).await.is_err());
        }
        assert_eq!(backend.call_count(), 3);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_fails_then_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.wav");
        let backend =
            MockBackend::fails_then_succeeds(2, TtsError::RateLimited { retry_after: None });

        assert!(backend.synthesize("x", &voice(), &out).await.is_err());
        assert!(backend.synthesize("x", &voice(), &out).await.is_err());
        assert!(backend.synthesize("x", &voice(), &out).await.is_ok());
        assert_eq!(backend.call_count(), 3);
    }

    #[test]
    fn test_chunk_limit_override() {
        let backend = MockBackend::always_succeeds().with_max_chunk_chars(10);
        assert_eq!(backend.max_chunk_chars(), Some(10));
    }
}
