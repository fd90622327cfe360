//! macOS `say` backend
//!
//! Uses the system speech synthesizer. Output is AIFF; voice selection is
//! left to the system default unless a voice name is configured.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::backend::TtsBackend;
use crate::error::{Result, TtsError};
use crate::voice::VoiceConfig;

/// Local TTS backend using the macOS `say` subprocess.
pub struct SayBackend {
    binary: PathBuf,
}

impl SayBackend {
    /// Create a new `say` backend, failing if the binary is absent.
    pub fn new() -> Result<Self> {
        let binary = which::which("say").map_err(|_| {
            TtsError::BackendUnavailable("the 'say' command is only available on macOS".into())
        })?;
        Ok(Self { binary })
    }
}

#[async_trait]
impl TtsBackend for SayBackend {
    async fn synthesize(&self, text: &str, voice: &VoiceConfig, out_path: &Path) -> Result<()> {
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }

        let mut cmd = Command::new(&self.binary);
        if let Some(name) = &voice.voice {
            cmd.args(["-v", name]);
        }
        cmd.arg("-o").arg(out_path).arg(text);

        let output = cmd
            .output()
            .await
            .map_err(|e| TtsError::EngineFailed(format!("failed to run say: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TtsError::EngineFailed(format!(
                "say exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "macOS say"
    }

    fn is_available(&self) -> Result<()> {
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "aiff"
    }
}
