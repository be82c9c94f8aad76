mod azure;
mod memory;
mod voice;

pub use azure::{AzureSynthesizer, DEFAULT_OUTPUT_FORMAT, build_ssml};
pub use memory::MemorySynthesizer;
pub use voice::{Voice, VoiceMap};

/// Speech synthesis provider interface
#[async_trait::async_trait]
pub trait Synthesizer: Send + Sync {
    /// Encoded audio for `text` spoken in `language`
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("TTS service error with code: {status}")]
    Service { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
