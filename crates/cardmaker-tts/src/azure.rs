use quick_xml::escape::escape;
use reqwest::StatusCode;

use crate::voice::{Voice, VoiceMap};
use crate::{SynthesisError, Synthesizer};

pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-16khz-128kbitrate-mono-mp3";

const DEFAULT_USER_AGENT: &str = "cardmaker";

/// Azure Cognitive Services text-to-speech over REST
#[derive(Clone)]
pub struct AzureSynthesizer {
    client: reqwest::Client,
    key: String,
    endpoint: String,
    voices: VoiceMap,
    output_format: String,
    user_agent: String,
}

impl AzureSynthesizer {
    pub fn new(key: String, region: &str, voices: VoiceMap) -> Self {
        Self {
            client: reqwest::Client::new(),
            key,
            endpoint: format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1"),
            voices,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Point at a different service URL (sovereign clouds, local proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// SSML request body speaking `text` with `voice`
pub fn build_ssml(text: &str, language: &str, voice: &Voice) -> String {
    let language = escape(language);
    format!(
        "<speak version=\"1.0\" xml:lang=\"{language}\">\n\
         <voice xml:lang=\"{language}\" xml:gender=\"{gender}\" name=\"{name}\">{text}</voice>\n\
         </speak>",
        gender = escape(voice.gender.as_str()),
        name = escape(voice.name.as_str()),
        text = escape(text),
    )
}

#[async_trait::async_trait]
impl Synthesizer for AzureSynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        let voice = self
            .voices
            .get(language)
            .ok_or_else(|| SynthesisError::UnsupportedLanguage(language.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.output_format)
            .header("User-Agent", &self.user_agent)
            .body(build_ssml(text, language, voice))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("TTS request for '{}' failed: HTTP {}", text, status);
            return Err(SynthesisError::Service {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
