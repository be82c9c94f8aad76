use cardmaker_core::TextNormalizer;
use regex::Regex;

use crate::LANGUAGE;

/// Full-width parenthetical, matched lazily so `甲（a）乙（b）` keeps `乙`
const ANNOTATION_PATTERN: &str = "（.*?）";

/// Strips full-width bracketed annotations before synthesis.
///
/// Word lists often carry hints like `行（xíng）`; only the headword should be
/// spoken.
pub struct ChineseNormalizer {
    annotation: Regex,
}

impl ChineseNormalizer {
    pub fn new() -> Self {
        Self {
            annotation: Regex::new(ANNOTATION_PATTERN).expect("valid regex"),
        }
    }
}

impl Default for ChineseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer for ChineseNormalizer {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn normalize(&self, text: &str) -> String {
        self.annotation.replace_all(text, "").into_owned()
    }
}
