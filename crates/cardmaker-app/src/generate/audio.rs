use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use cardmaker_core::{GeneratedAsset, NormalizerRegistry, WordLine};
use cardmaker_tts::Synthesizer;

use super::{GenerationReport, write_asset};

pub struct AudioJob<'a> {
    pub language: &'a str,
    pub output: &'a Path,
    pub prefix: &'a str,
    /// Sleep after every synthesis call
    pub pause: Duration,
}

/// Synthesize `<prefix><word>.mp3` for every word that doesn't have one yet.
///
/// The existence check happens before normalization or any request. The
/// first synthesis or write failure ends the run; files already written stay.
pub async fn generate_audio<S>(
    synthesizer: &S,
    normalizers: &NormalizerRegistry,
    lines: &[WordLine],
    job: &AudioJob<'_>,
) -> anyhow::Result<GenerationReport>
where
    S: Synthesizer + ?Sized,
{
    let mut report = GenerationReport::default();

    for line in lines {
        let word = line.canonical();

        let asset = GeneratedAsset::audio(job.output, job.prefix, word);
        if asset.exists() {
            tracing::debug!("Skipping {}: {} exists", word, asset.path.display());
            report.skipped += 1;
            continue;
        }

        let text = normalizers.normalize(job.language, word);
        if text != word {
            tracing::info!("{} => {}", word, text);
        } else {
            tracing::info!("{}", word);
        }

        let audio = synthesizer
            .synthesize(&text, job.language)
            .await
            .with_context(|| format!("TTS error for '{word}'"))?;

        write_asset(&asset, &audio).await?;
        report.generated += 1;

        if !job.pause.is_zero() {
            tokio::time::sleep(job.pause).await;
        }
    }

    Ok(report)
}
