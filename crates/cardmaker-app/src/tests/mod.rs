mod audio_tests;
mod definition_tests;
mod pipeline_tests;

use std::collections::HashMap;
use std::sync::Mutex;

use cardmaker_core::{DefinitionLookup, StoreError, WordLine};

/// In-memory dictionary that records every word it is asked about
#[derive(Default)]
pub struct CountingLookup {
    entries: HashMap<String, Vec<String>>,
    unavailable: bool,
    queries: Mutex<Vec<String>>,
}

impl CountingLookup {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (word, definition) in entries {
            map.entry(word.to_string())
                .or_default()
                .push(definition.to_string());
        }

        Self {
            entries: map,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DefinitionLookup for CountingLookup {
    async fn definitions(&self, word: &str) -> Result<Vec<String>, StoreError> {
        self.queries.lock().unwrap().push(word.to_string());

        if self.unavailable {
            return Err(StoreError::Unavailable("store is closed".to_string()));
        }

        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}

pub fn lines(raw: &[&str]) -> Vec<WordLine> {
    raw.iter().filter_map(|line| WordLine::parse(line)).collect()
}
