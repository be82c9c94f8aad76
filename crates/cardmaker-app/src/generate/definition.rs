use std::path::Path;

use anyhow::Context;
use cardmaker_core::{DefinitionLookup, GeneratedAsset, ResolveError, WordLine};
use cardmaker_dictionary::DefinitionResolver;

use super::{GenerationReport, write_asset};

pub struct DefinitionJob<'a> {
    pub output: &'a Path,
}

/// Write `<word>.txt` for every word that resolves and has no file yet.
///
/// The file is always named after the canonical word, even when a fallback
/// variant supplied the definitions. Unknown words are logged and skipped;
/// any other error ends the run.
pub async fn generate_definitions<L>(
    resolver: &DefinitionResolver<L>,
    lines: &[WordLine],
    job: &DefinitionJob<'_>,
) -> anyhow::Result<GenerationReport>
where
    L: DefinitionLookup,
{
    let mut report = GenerationReport::default();

    for line in lines {
        let word = line.canonical();
        tracing::info!("{}", word);

        let asset = GeneratedAsset::definition(job.output, word);
        if asset.exists() {
            tracing::debug!("Skipping {}: {} exists", word, asset.path.display());
            report.skipped += 1;
            continue;
        }

        match resolver.resolve(&line.variants).await {
            Ok(definitions) => {
                write_asset(&asset, definitions.join("\n").as_bytes()).await?;
                report.generated += 1;
            }
            Err(ResolveError::NotFound(_)) => {
                tracing::warn!("words [{}] not found", line.variants.join(","));
                report.not_found += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to look up '{word}'"));
            }
        }
    }

    Ok(report)
}
