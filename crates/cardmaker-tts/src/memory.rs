use std::sync::Mutex;

use crate::voice::VoiceMap;
use crate::{SynthesisError, Synthesizer};

/// Deterministic in-process synthesizer for tests and dry runs.
///
/// Audio is the bytes of `"<language>|<text>"`. Every call is recorded.
#[derive(Default)]
pub struct MemorySynthesizer {
    voices: Option<VoiceMap>,
    failure: Option<u16>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MemorySynthesizer {
    /// Accepts every language
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects languages missing from `voices`
    pub fn with_voices(voices: VoiceMap) -> Self {
        Self {
            voices: Some(voices),
            ..Self::default()
        }
    }

    /// Fails every call as if the service answered `status`
    pub fn failing(status: u16) -> Self {
        Self {
            failure: Some(status),
            ..Self::default()
        }
    }

    pub fn audio_for(text: &str, language: &str) -> Vec<u8> {
        format!("{language}|{text}").into_bytes()
    }

    /// `(text, language)` of every call so far
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Synthesizer for MemorySynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), language.to_string()));
        }

        if let Some(voices) = &self.voices {
            if voices.get(language).is_none() {
                return Err(SynthesisError::UnsupportedLanguage(language.to_string()));
            }
        }

        if let Some(status) = self.failure {
            return Err(SynthesisError::Service { status });
        }

        Ok(Self::audio_for(text, language))
    }
}
