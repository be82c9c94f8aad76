use std::path::Path;

use anyhow::Context;
use cardmaker_core::{GeneratedAsset, WordLine};

pub mod audio;
pub mod definition;

pub use audio::{AudioJob, generate_audio};
pub use definition::{DefinitionJob, generate_definitions};

/// Per-run counts, logged when a mode finishes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub generated: usize,
    pub skipped: usize,
    pub not_found: usize,
}

/// Parse the word list, dropping lines without a word
pub async fn read_word_lines(path: &Path) -> anyhow::Result<Vec<WordLine>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    Ok(content.lines().filter_map(WordLine::parse).collect())
}

async fn write_asset(asset: &GeneratedAsset, bytes: &[u8]) -> anyhow::Result<()> {
    tokio::fs::write(&asset.path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", asset.path.display()))
}
