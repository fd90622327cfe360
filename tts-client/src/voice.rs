//! Language and voice selection types.

use std::fmt;
use std::str::FromStr;

/// Languages the pipeline can narrate in.
///
/// The set is closed: an unsupported code is rejected at parse time, before
/// any synthesis work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Italian,
    English,
}

impl Language {
    /// Short code as used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Italian => "it",
            Language::English => "en",
        }
    }

    /// Full BCP-47 tag for backends that want one.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Italian => "it-IT",
            Language::English => "en-US",
        }
    }

}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "it" | "it-it" => Ok(Language::Italian),
            "en" | "en-us" | "en-gb" => Ok(Language::English),
            other => Err(format!(
                "unsupported language '{}' (supported: it, en)",
                other
            )),
        }
    }
}

/// Voice parameters bound to a synthesis session.
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Narration language.
    pub language: Language,
    /// Backend-specific voice name, if the user picked one.
    pub voice: Option<String>,
}

impl VoiceConfig {
    /// Create a voice configuration with the backend's default voice.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            voice: None,
        }
    }

    /// Set an explicit voice name.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}
