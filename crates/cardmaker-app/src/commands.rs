use std::time::Duration;

use anyhow::{Context, bail};
use cardmaker_anki::AssembleOptions;
use cardmaker_config::Config;
use cardmaker_core::{NormalizerRegistry, PatternNormalizer};
use cardmaker_dictionary::{
    DefinitionResolver, EntryFormat, SqliteStore, build_store, default_store_path,
};
use cardmaker_lang_chinese::ChineseNormalizer;
use cardmaker_tts::{AzureSynthesizer, Voice, VoiceMap};

use crate::cli::MakedbArgs;
use crate::generate::{
    AudioJob, DefinitionJob, GenerationReport, generate_audio, generate_definitions,
    read_word_lines,
};

pub async fn make_db(args: &MakedbArgs, config: &Config) -> anyhow::Result<()> {
    let store = args
        .db
        .clone()
        .unwrap_or_else(|| default_store_path(&args.dictionary));

    let format = EntryFormat {
        entry_tag: config.dictionary.entry_tag.clone(),
        title_attr: config.dictionary.title_attr.clone(),
    };

    let report = build_store(&args.dictionary, &store, &format)
        .await
        .with_context(|| format!("Failed to build store from {}", args.dictionary.display()))?;

    tracing::info!("done: {} entries in {}", report.entries, report.store.display());
    Ok(())
}

pub async fn generate_sound(config: &Config) -> anyhow::Result<()> {
    if config.tts.key.is_empty() {
        bail!("Missing Azure TTS key: pass --key or set AZURE_TTS_KEY");
    }

    let synthesizer =
        AzureSynthesizer::new(config.tts.key.clone(), &config.tts.region, voice_map(config))
            .with_output_format(config.tts.output_format.clone())
            .with_user_agent(config.tts.user_agent.clone());
    let normalizers = normalizer_registry(config)?;

    let lines = read_word_lines(&config.generate.words).await?;
    create_output_dir(config).await?;

    let job = AudioJob {
        language: &config.generate.language,
        output: &config.generate.output,
        prefix: &config.generate.prefix,
        pause: Duration::from_millis(config.tts.pause_ms),
    };
    let report = generate_audio(&synthesizer, &normalizers, &lines, &job).await?;

    log_report("sound", &report);
    Ok(())
}

pub async fn generate_definition(config: &Config) -> anyhow::Result<()> {
    let store = SqliteStore::open(&config.dictionary.db)
        .await
        .context("Failed to open dictionary store")?;
    let resolver = DefinitionResolver::new(store);

    let lines = read_word_lines(&config.generate.words).await?;
    create_output_dir(config).await?;

    let job = DefinitionJob {
        output: &config.generate.output,
    };
    let report = generate_definitions(&resolver, &lines, &job).await?;

    log_report("definition", &report);
    Ok(())
}

pub async fn generate_anki(config: &Config) -> anyhow::Result<()> {
    if config.anki.field_limit == 0 {
        bail!("anki.field_limit must be at least 1");
    }

    create_output_dir(config).await?;

    let definition_dir = config.anki.definition_dir.clone();
    let output = config.generate.output.join(&config.anki.file_name);
    let prefix = config.generate.prefix.clone();
    let field_limit = config.anki.field_limit;

    let report = tokio::task::spawn_blocking(move || {
        cardmaker_anki::assemble(&AssembleOptions {
            definition_dir: &definition_dir,
            output: &output,
            prefix: &prefix,
            field_limit,
        })
    })
    .await
    .context("Card assembly task panicked")?
    .context("Failed to assemble cards")?;

    tracing::info!(
        "done: {} rows written to {} ({} entries skipped)",
        report.rows,
        report.output.display(),
        report.skipped
    );
    Ok(())
}

pub fn voice_map(config: &Config) -> VoiceMap {
    config
        .tts
        .voices
        .iter()
        .map(|(language, voice)| (language.clone(), Voice::new(&voice.name, &voice.gender)))
        .collect()
}

/// Built-in normalizers plus the rules from config, which take precedence
pub fn normalizer_registry(config: &Config) -> anyhow::Result<NormalizerRegistry> {
    let mut registry = NormalizerRegistry::new();
    registry.register(Box::new(ChineseNormalizer::new()));

    for (language, rule) in &config.normalization {
        let normalizer = PatternNormalizer::new(language, &rule.pattern, &rule.replacement)
            .with_context(|| format!("Invalid normalization pattern for {language}"))?;
        registry.register(Box::new(normalizer));
    }

    tracing::debug!("Normalizers: {:?}", registry.languages());
    Ok(registry)
}

async fn create_output_dir(config: &Config) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&config.generate.output)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.generate.output.display()
            )
        })
}

fn log_report(mode: &str, report: &GenerationReport) {
    tracing::info!(
        "done ({}): {} generated, {} skipped, {} not found",
        mode,
        report.generated,
        report.skipped,
        report.not_found
    );
}
