use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_words() -> PathBuf {
    PathBuf::from("./words.txt")
}

fn default_language() -> String {
    "zh-CN".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("./")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GenerateConfig {
    /// Word list, one comma-separated variant list per line
    #[serde(default = "default_words")]
    pub words: PathBuf,
    /// Drives voice selection and text normalization
    #[serde(default = "default_language")]
    pub language: String,
    /// Where audio, definitions and the card export are written
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Prepended to audio file names and sound references
    #[serde(default)]
    pub prefix: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
            language: default_language(),
            output: default_output(),
            prefix: String::new(),
        }
    }
}
