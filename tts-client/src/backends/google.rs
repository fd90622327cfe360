//! Google Translate TTS backend
//!
//! Uses the public translate TTS endpoint over HTTP. Requests are capped at
//! a small text size, so callers are expected to chunk chapter text first.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

use crate::backend::TtsBackend;
use crate::error::{Result, TtsError};
use crate::voice::VoiceConfig;

/// Hard per-request text limit of the translate TTS endpoint.
pub const GOOGLE_TTS_MAX_CHARS: usize = 100;

const ENDPOINT: &str = "https://translate.google.com/translate_tts";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Network TTS backend speaking the translate TTS protocol.
pub struct GoogleTranslateBackend {
    client: Client,
}

impl GoogleTranslateBackend {
    /// Create a new backend with its own HTTP client.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TtsError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TtsBackend for GoogleTranslateBackend {
    async fn synthesize(&self, text: &str, voice: &VoiceConfig, out_path: &Path) -> Result<()> {
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }

        debug!("translate_tts request: {} chars", text.chars().count());
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", voice.language.code()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!("translate_tts rate limited (retry after {:?}s)", retry_after);
            return Err(TtsError::RateLimited { retry_after });
        }
        if !status.is_success() {
            return Err(TtsError::ServiceError {
                message: format!("translate_tts refused request ({})", voice.language.code()),
                status_code: Some(status.as_u16()),
            });
        }

        let bytes = response.bytes().await.map_err(classify_request_error)?;
        tokio::fs::write(out_path, &bytes).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Google Translate TTS"
    }

    fn is_available(&self) -> Result<()> {
        Ok(())
    }

    fn max_chunk_chars(&self) -> Option<usize> {
        Some(GOOGLE_TTS_MAX_CHARS)
    }

    fn file_extension(&self) -> &'static str {
        "mp3"
    }
}

fn classify_request_error(err: reqwest::Error) -> TtsError {
    if err.is_timeout() || err.is_connect() {
        TtsError::Network(err.to_string())
    } else {
        TtsError::ServiceError {
            message: err.to_string(),
            status_code: err.status().map(|s| s.as_u16()),
        }
    }
}
