use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_region() -> String {
    "southeastasia".to_string()
}

fn default_output_format() -> String {
    "audio-16khz-128kbitrate-mono-mp3".to_string()
}

fn default_user_agent() -> String {
    "cardmaker".to_string()
}

/// Pause after each synthesis call
fn default_pause_ms() -> u64 {
    100
}

fn default_gender() -> String {
    "Female".to_string()
}

fn default_voices() -> HashMap<String, VoiceConfig> {
    HashMap::from([
        (
            "zh-CN".to_string(),
            VoiceConfig {
                name: "zh-CN-XiaoxiaoNeural".to_string(),
                gender: default_gender(),
            },
        ),
        (
            "en-US".to_string(),
            VoiceConfig {
                name: "en-US-JennyNeural".to_string(),
                gender: default_gender(),
            },
        ),
    ])
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    /// Azure voice name, e.g. "en-US-JennyNeural"
    pub name: String,
    #[serde(default = "default_gender")]
    pub gender: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TtsConfig {
    /// Azure Speech subscription key
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Language tag to voice
    #[serde(default = "default_voices")]
    pub voices: HashMap<String, VoiceConfig>,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            region: default_region(),
            output_format: default_output_format(),
            user_agent: default_user_agent(),
            pause_ms: default_pause_ms(),
            voices: default_voices(),
        }
    }
}
