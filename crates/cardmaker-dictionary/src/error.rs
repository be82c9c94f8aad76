use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Entry {index} has no {attr} attribute")]
    MissingTitle { index: usize, attr: String },

    #[error("Entry {index} is not closed before end of document")]
    UnclosedEntry { index: usize },

    #[error("Entry {index} is not valid UTF-8 after serialization")]
    Encoding { index: usize },

    #[error("Dictionary store not found: {0}")]
    StoreNotFound(PathBuf),

    #[error("Storage error: {0}")]
    Storage(#[from] libsql::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
