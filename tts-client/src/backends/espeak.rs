//! espeak-ng backend
//!
//! Drives the local espeak-ng engine as a subprocess, feeding text on stdin
//! and writing a WAV file. No per-call length limit.

use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::backend::TtsBackend;
use crate::error::{Result, TtsError};
use crate::voice::VoiceConfig;

/// Local TTS backend using the espeak-ng subprocess.
pub struct EspeakBackend {
    binary: PathBuf,
}

impl EspeakBackend {
    /// Create a new espeak backend.
    ///
    /// Returns an error if the engine binary cannot be found.
    pub fn new(binary: Option<PathBuf>) -> Result<Self> {
        let binary = match binary {
            Some(path) => {
                if !path.exists() {
                    return Err(TtsError::BackendUnavailable(format!(
                        "espeak not found at specified path: {}",
                        path.display()
                    )));
                }
                path
            }
            None => which::which("espeak-ng")
                .or_else(|_| which::which("espeak"))
                .map_err(|_| {
                    TtsError::BackendUnavailable(
                        "espeak-ng not found in PATH. Install it with your package manager.".into(),
                    )
                })?,
        };

        Ok(Self { binary })
    }
}

#[async_trait]
impl TtsBackend for EspeakBackend {
    async fn synthesize(&self, text: &str, voice: &VoiceConfig, out_path: &Path) -> Result<()> {
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }

        // An explicit voice name wins over the plain language code.
        let voice_name = voice
            .voice
            .clone()
            .unwrap_or_else(|| voice.language.code().to_string());

        debug!(
            "{} -v {} -w {}",
            self.binary.display(),
            voice_name,
            out_path.display()
        );
        let mut child = Command::new(&self.binary)
            .arg("-v")
            .arg(&voice_name)
            .arg("-w")
            .arg(out_path)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TtsError::EngineFailed(format!("failed to spawn espeak: {}", e)))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| TtsError::EngineFailed("espeak stdin not captured".into()))?;
            stdin.write_all(text.as_bytes()).await?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| TtsError::EngineFailed(format!("espeak did not exit cleanly: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TtsError::EngineFailed(format!(
                "espeak exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "espeak-ng"
    }

    fn is_available(&self) -> Result<()> {
        // Existence was checked in the constructor.
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_binary_is_rejected() {
        let result = EspeakBackend::new(Some(PathBuf::from("/nonexistent/espeak-ng")));
        assert!(matches!(result, Err(TtsError::BackendUnavailable(_))));
    }
}
