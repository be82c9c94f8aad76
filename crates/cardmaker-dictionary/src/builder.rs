use std::path::{Path, PathBuf};

use crate::error::DictionaryError;
use crate::loaders::xml::{EntryFormat, parse_entries};
use crate::store::SqliteStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub store: PathBuf,
    pub entries: usize,
}

/// `dict/Oxford.xml` -> `dict/Oxford.db`
pub fn default_store_path(source: &Path) -> PathBuf {
    source.with_extension("db")
}

/// Rebuild the store at `store_path` from the XML document at `source`.
///
/// Any existing store file is deleted first. Rows are inserted one at a time
/// without a transaction, so a failed build leaves a partial store behind;
/// the next build removes it.
pub async fn build_store(
    source: &Path,
    store_path: &Path,
    format: &EntryFormat,
) -> Result<BuildReport, DictionaryError> {
    if store_path.exists() {
        tracing::info!("Removing existing store {}", store_path.display());
        tokio::fs::remove_file(store_path).await?;
    }

    let store = SqliteStore::create(store_path).await?;

    tracing::info!("Parsing dictionary {}", source.display());
    let xml = tokio::fs::read_to_string(source).await?;
    let entries = parse_entries(&xml, format)?;
    tracing::info!("Parsed {} entries", entries.len());

    for entry in &entries {
        store.insert(entry).await?;
    }

    Ok(BuildReport {
        store: store_path.to_path_buf(),
        entries: entries.len(),
    })
}
