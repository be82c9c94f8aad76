use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_definition_dir() -> PathBuf {
    PathBuf::from("./definition")
}

fn default_file_name() -> String {
    "anki.txt".to_string()
}

/// Anki rejects fields longer than this many characters
fn default_field_limit() -> usize {
    131071
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnkiConfig {
    /// Directory holding generated `<word>.txt` definitions
    #[serde(default = "default_definition_dir")]
    pub definition_dir: PathBuf,
    /// Export file name, created inside the output directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_field_limit")]
    pub field_limit: usize,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            definition_dir: default_definition_dir(),
            file_name: default_file_name(),
            field_limit: default_field_limit(),
        }
    }
}
