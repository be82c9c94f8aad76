use std::collections::HashMap;

use crate::preprocess::PassthroughNormalizer;

/// BCP 47 style tag, e.g. "zh-CN" or "en-US"
pub type LanguageTag = String;

/// Rewrites a word into the text sent to speech synthesis
pub trait TextNormalizer: Send + Sync {
    /// Tag this normalizer is registered under
    fn language(&self) -> &str;

    fn normalize(&self, text: &str) -> String;
}

/// Normalizers keyed by language tag.
///
/// Languages without a registered normalizer pass text through unchanged.
pub struct NormalizerRegistry {
    normalizers: HashMap<LanguageTag, Box<dyn TextNormalizer>>,
    fallback: PassthroughNormalizer,
}

impl NormalizerRegistry {
    pub fn new() -> Self {
        Self {
            normalizers: HashMap::new(),
            fallback: PassthroughNormalizer,
        }
    }

    /// Register a normalizer, replacing any previous one for the same language
    pub fn register(&mut self, normalizer: Box<dyn TextNormalizer>) {
        self.normalizers
            .insert(normalizer.language().to_string(), normalizer);
    }

    pub fn get(&self, language: &str) -> &dyn TextNormalizer {
        self.normalizers
            .get(language)
            .map(|n| &**n)
            .unwrap_or(&self.fallback as &dyn TextNormalizer)
    }

    pub fn normalize(&self, language: &str, text: &str) -> String {
        self.get(language).normalize(text)
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.normalizers.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
