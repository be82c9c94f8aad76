use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::generate::GenerateConfig;
use self::tts::TtsConfig;

pub mod anki;
pub mod dictionary;
pub mod generate;
pub mod tts;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cardmaker.json";

/// Extra regex rewrite applied before synthesis for one language
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NormalizationRule {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub generate: GenerateConfig,
    pub tts: TtsConfig,
    pub anki: AnkiConfig,
    /// Language tag to rewrite rule
    pub normalization: HashMap<String, NormalizationRule>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults, then the config file, then environment variables.
    ///
    /// An explicit `path` must exist. Without one, `cardmaker.json` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `AZURE_TTS_KEY`, `AZURE_TTS_REGION` and `CARDMAKER_PREFIX`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("AZURE_TTS_KEY") {
            self.tts.key = key;
        }

        if let Some(region) = lookup("AZURE_TTS_REGION") {
            self.tts.region = region;
        }

        if let Some(prefix) = lookup("CARDMAKER_PREFIX") {
            self.generate.prefix = prefix;
        }
    }
}
