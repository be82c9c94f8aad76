use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_db() -> PathBuf {
    PathBuf::from("./dict.db")
}

fn default_entry_tag() -> String {
    "d:entry".to_string()
}

fn default_title_attr() -> String {
    "d:title".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// SQLite store queried by definition generation
    #[serde(default = "default_db")]
    pub db: PathBuf,
    /// Qualified name of entry elements in the source XML
    #[serde(default = "default_entry_tag")]
    pub entry_tag: String,
    /// Entry attribute holding the headword
    #[serde(default = "default_title_attr")]
    pub title_attr: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            db: default_db(),
            entry_tag: default_entry_tag(),
            title_attr: default_title_attr(),
        }
    }
}
