use std::path::PathBuf;

use cardmaker_config::Config;
use clap::{Args, Parser, Subcommand};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "cardmaker")]
#[command(about = "Build Anki cards with definitions and audio from a word list")]
pub struct Cli {
    /// JSON config file (default: ./cardmaker.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a sqlite database from a dictionary XML file
    Makedb(MakedbArgs),
    /// Generate audio, definitions or the Anki import file
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct MakedbArgs {
    /// Dictionary XML file
    pub dictionary: PathBuf,

    /// Database to create (default: dictionary path with a .db extension)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Entry element name [default: d:entry]
    #[arg(long)]
    pub entry_tag: Option<String>,

    /// Headword attribute on entries [default: d:title]
    #[arg(long)]
    pub title_attr: Option<String>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// A words list [default: ./words.txt]
    #[arg(long, global = true)]
    pub word: Option<PathBuf>,

    /// A sqlite database file [default: ./dict.db]
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Language of words [default: zh-CN]
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Output directory of resources [default: ./]
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Prefix for media file names
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    #[command(subcommand)]
    pub mode: GenerateMode,
}

#[derive(Debug, Subcommand)]
pub enum GenerateMode {
    /// Generate sound
    Sound(SoundArgs),
    /// Generate definitions
    Definition,
    /// Generate Anki card import file
    Anki(AnkiArgs),
}

#[derive(Debug, Args)]
pub struct SoundArgs {
    /// Key of Azure TTS service (or AZURE_TTS_KEY)
    #[arg(long)]
    pub key: Option<String>,

    /// Region of Azure TTS service [default: southeastasia]
    #[arg(long)]
    pub region: Option<String>,

    /// Pause between synthesis calls in milliseconds [default: 100]
    #[arg(long)]
    pub pause_ms: Option<u64>,
}

#[derive(Debug, Args)]
pub struct AnkiArgs {
    /// Path to definition directory [default: ./definition]
    #[arg(long)]
    pub definition: Option<PathBuf>,
}

impl MakedbArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(entry_tag) = &self.entry_tag {
            config.dictionary.entry_tag = entry_tag.clone();
        }
        if let Some(title_attr) = &self.title_attr {
            config.dictionary.title_attr = title_attr.clone();
        }
    }
}

impl GenerateArgs {
    /// Flags given on the command line win over config and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(word) = &self.word {
            config.generate.words = word.clone();
        }
        if let Some(db) = &self.db {
            config.dictionary.db = db.clone();
        }
        if let Some(language) = &self.language {
            config.generate.language = language.clone();
        }
        if let Some(output) = &self.output {
            config.generate.output = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.generate.prefix = prefix.clone();
        }

        match &self.mode {
            GenerateMode::Sound(args) => args.apply(config),
            GenerateMode::Definition => {}
            GenerateMode::Anki(args) => args.apply(config),
        }
    }
}

impl SoundArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(key) = &self.key {
            config.tts.key = key.clone();
        }
        if let Some(region) = &self.region {
            config.tts.region = region.clone();
        }
        if let Some(pause_ms) = self.pause_ms {
            config.tts.pause_ms = pause_ms;
        }
    }
}

impl AnkiArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(definition) = &self.definition {
            config.anki.definition_dir = definition.clone();
        }
    }
}
