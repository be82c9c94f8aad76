/// Case-insensitive headword lookup against a definition store
#[async_trait::async_trait]
pub trait DefinitionLookup: Send + Sync {
    /// All definitions stored under `word`, in insertion order.
    ///
    /// An absent word yields an empty vec, not an error.
    async fn definitions(&self, word: &str) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    Query(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Word not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
