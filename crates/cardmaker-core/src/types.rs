use std::path::{Path, PathBuf};

/// One line of the word list: the canonical word followed by fallback spellings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLine {
    pub variants: Vec<String>,
}

impl WordLine {
    /// Split a word-list line on commas.
    ///
    /// Returns `None` for a line without a canonical word (blank line or a
    /// leading comma). Empty fallback variants are dropped.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(',').map(str::trim);

        let canonical = parts.next().filter(|w| !w.is_empty())?;

        let mut variants = vec![canonical.to_string()];
        variants.extend(parts.filter(|v| !v.is_empty()).map(str::to_string));

        Some(Self { variants })
    }

    /// First variant, used for every output file name
    pub fn canonical(&self) -> &str {
        &self.variants[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Audio,
    Definition,
}

impl AssetKind {
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Audio => "mp3",
            AssetKind::Definition => "txt",
        }
    }
}

/// A per-word file produced by the generator.
///
/// The file's presence at `path` is the only record that the word is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub word: String,
    pub kind: AssetKind,
    pub path: PathBuf,
}

impl GeneratedAsset {
    /// `<dir>/<prefix><word>.mp3`
    pub fn audio(dir: &Path, prefix: &str, word: &str) -> Self {
        Self {
            word: word.to_string(),
            kind: AssetKind::Audio,
            path: dir.join(format!("{prefix}{word}.{}", AssetKind::Audio.extension())),
        }
    }

    /// `<dir>/<word>.txt`
    pub fn definition(dir: &Path, word: &str) -> Self {
        Self {
            word: word.to_string(),
            kind: AssetKind::Definition,
            path: dir.join(format!("{word}.{}", AssetKind::Definition.extension())),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Number of definition columns on a card
pub const DEFINITION_FIELDS: usize = 3;

/// Fixed five-column export record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnkiRow {
    pub word: String,
    pub sound: String,
    pub definitions: [String; DEFINITION_FIELDS],
}

impl AnkiRow {
    /// Segments past the third are dropped.
    pub fn new(word: String, sound: String, segments: Vec<String>) -> Self {
        let mut definitions: [String; DEFINITION_FIELDS] = Default::default();
        for (slot, segment) in definitions.iter_mut().zip(segments) {
            *slot = segment;
        }

        Self {
            word,
            sound,
            definitions,
        }
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            &self.word,
            &self.sound,
            &self.definitions[0],
            &self.definitions[1],
            &self.definitions[2],
        ]
    }
}
