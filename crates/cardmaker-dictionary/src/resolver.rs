use cardmaker_core::{DefinitionLookup, ResolveError};

/// Finds definitions for a word, falling back over its variant spellings
pub struct DefinitionResolver<L> {
    lookup: L,
}

impl<L: DefinitionLookup> DefinitionResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Definitions of the first variant that has any.
    ///
    /// Later variants are not queried once one matches. Storage errors are
    /// returned as they are, never as `NotFound`.
    pub async fn resolve(&self, variants: &[String]) -> Result<Vec<String>, ResolveError> {
        for variant in variants {
            let definitions = self.lookup.definitions(variant).await?;
            if !definitions.is_empty() {
                tracing::debug!("Resolved '{}' ({} definitions)", variant, definitions.len());
                return Ok(definitions);
            }
        }

        Err(ResolveError::NotFound(
            variants.first().cloned().unwrap_or_default(),
        ))
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
