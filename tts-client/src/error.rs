use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    #[error(
        "Rate limit exceeded{}",
        .retry_after.map(|s| format!(". Retry after {} seconds", s)).unwrap_or_default()
    )]
    RateLimited { retry_after: Option<u64> },

    #[error("TTS service error{}: {message}", status_code.map(|c| format!(" (HTTP {})", c)).unwrap_or_default())]
    ServiceError {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Speech engine failed: {0}")]
    EngineFailed(String),

    #[error("Nothing to synthesize: text is empty")]
    EmptyText,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TtsError {
    /// Transient conditions get one retry after a fixed backoff; everything
    /// else is terminal for the chunk that hit it.
    pub fn is_transient(&self) -> bool {
        match self {
            TtsError::RateLimited { .. } => true,
            TtsError::Network(_) => true,
            TtsError::ServiceError {
                status_code: Some(code),
                ..
            } => *code == 429 || *code >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TtsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_is_transient() {
        assert!(TtsError::RateLimited { retry_after: None }.is_transient());
        assert!(TtsError::RateLimited { retry_after: Some(3) }.is_transient());
    }

    #[test]
    fn test_server_errors_are_transient() {
        let err = TtsError::ServiceError {
            message: "overloaded".to_string(),
            status_code: Some(503),
        };
        assert!(err.is_transient());

        let err = TtsError::ServiceError {
            message: "too many requests".to_string(),
            status_code: Some(429),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_errors_are_terminal() {
        let err = TtsError::ServiceError {
            message: "bad request".to_string(),
            status_code: Some(400),
        };
        assert!(!err.is_transient());
        assert!(!TtsError::EmptyText.is_transient());
        assert!(!TtsError::EngineFailed("boom".to_string()).is_transient());
    }
}
