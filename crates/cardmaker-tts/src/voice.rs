use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Provider voice name, e.g. "en-US-JennyNeural"
    pub name: String,
    pub gender: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
        }
    }
}

/// One voice per supported language tag
#[derive(Debug, Clone, Default)]
pub struct VoiceMap {
    voices: HashMap<String, Voice>,
}

impl VoiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voice(mut self, language: impl Into<String>, voice: Voice) -> Self {
        self.insert(language, voice);
        self
    }

    pub fn insert(&mut self, language: impl Into<String>, voice: Voice) {
        self.voices.insert(language.into(), voice);
    }

    pub fn get(&self, language: &str) -> Option<&Voice> {
        self.voices.get(language)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl FromIterator<(String, Voice)> for VoiceMap {
    fn from_iter<I: IntoIterator<Item = (String, Voice)>>(iter: I) -> Self {
        Self {
            voices: iter.into_iter().collect(),
        }
    }
}
