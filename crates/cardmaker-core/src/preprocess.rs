use regex::Regex;

use crate::language::TextNormalizer;

/// Leaves text untouched
pub struct PassthroughNormalizer;

impl TextNormalizer for PassthroughNormalizer {
    fn language(&self) -> &str {
        "*"
    }

    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Replaces every match of a pattern, e.g. stripping bracketed annotations
pub struct PatternNormalizer {
    language: String,
    pattern: Regex,
    replacement: String,
}

impl PatternNormalizer {
    pub fn new(language: &str, pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            language: language.to_string(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }
}

impl TextNormalizer for PatternNormalizer {
    fn language(&self) -> &str {
        &self.language
    }

    fn normalize(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}
