use std::time::Duration;

use cardmaker_core::NormalizerRegistry;
use cardmaker_lang_chinese::ChineseNormalizer;
use cardmaker_tts::{MemorySynthesizer, SynthesisError, Synthesizer, Voice, VoiceMap};
use tempfile::TempDir;

use super::lines;
use crate::generate::{AudioJob, generate_audio};

fn job<'a>(temp: &'a TempDir, language: &'a str, prefix: &'a str) -> AudioJob<'a> {
    AudioJob {
        language,
        output: temp.path(),
        prefix,
        pause: Duration::ZERO,
    }
}

/// Fails on one word, succeeds on the rest
struct FailOn(&'static str);

#[async_trait::async_trait]
impl Synthesizer for FailOn {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        if text == self.0 {
            return Err(SynthesisError::Service { status: 429 });
        }
        Ok(MemorySynthesizer::audio_for(text, language))
    }
}

#[tokio::test]
async fn test_second_run_makes_no_requests() {
    let temp = TempDir::new().unwrap();
    let words = lines(&["run", "walk"]);
    let normalizers = NormalizerRegistry::new();

    let synth = MemorySynthesizer::new();
    let report = generate_audio(&synth, &normalizers, &words, &job(&temp, "en-US", ""))
        .await
        .unwrap();
    assert_eq!(report.generated, 2);
    assert_eq!(
        std::fs::read(temp.path().join("run.mp3")).unwrap(),
        MemorySynthesizer::audio_for("run", "en-US")
    );

    let synth = MemorySynthesizer::new();
    let report = generate_audio(&synth, &normalizers, &words, &job(&temp, "en-US", ""))
        .await
        .unwrap();
    assert_eq!(report.generated, 0);
    assert_eq!(report.skipped, 2);
    assert!(synth.calls().is_empty());
}

#[tokio::test]
async fn test_normalized_text_is_spoken_raw_word_names_file() {
    let temp = TempDir::new().unwrap();
    let mut normalizers = NormalizerRegistry::new();
    normalizers.register(Box::new(ChineseNormalizer::new()));

    let synth = MemorySynthesizer::new();
    generate_audio(&synth, &normalizers, &lines(&["行（xíng）"]), &job(&temp, "zh-CN", ""))
        .await
        .unwrap();

    assert_eq!(synth.calls(), vec![("行".to_string(), "zh-CN".to_string())]);
    assert_eq!(
        std::fs::read(temp.path().join("行（xíng）.mp3")).unwrap(),
        MemorySynthesizer::audio_for("行", "zh-CN")
    );
}

#[tokio::test]
async fn test_other_languages_are_not_normalized() {
    let temp = TempDir::new().unwrap();
    let mut normalizers = NormalizerRegistry::new();
    normalizers.register(Box::new(ChineseNormalizer::new()));

    let synth = MemorySynthesizer::new();
    generate_audio(&synth, &normalizers, &lines(&["run（x）"]), &job(&temp, "en-US", ""))
        .await
        .unwrap();

    assert_eq!(synth.calls()[0].0, "run（x）");
}

#[tokio::test]
async fn test_prefix_names_and_skips_the_same_file() {
    let temp = TempDir::new().unwrap();
    let words = lines(&["run"]);
    let normalizers = NormalizerRegistry::new();

    let synth = MemorySynthesizer::new();
    generate_audio(&synth, &normalizers, &words, &job(&temp, "en-US", "en_"))
        .await
        .unwrap();

    assert!(temp.path().join("en_run.mp3").exists());
    assert!(!temp.path().join("run.mp3").exists());

    let synth = MemorySynthesizer::new();
    let report = generate_audio(&synth, &normalizers, &words, &job(&temp, "en-US", "en_"))
        .await
        .unwrap();
    assert_eq!(report.skipped, 1);
    assert!(synth.calls().is_empty());
}

#[tokio::test]
async fn test_failure_stops_run_and_keeps_earlier_files() {
    let temp = TempDir::new().unwrap();
    let normalizers = NormalizerRegistry::new();

    let err = generate_audio(
        &FailOn("walk"),
        &normalizers,
        &lines(&["run", "walk", "jump"]),
        &job(&temp, "en-US", ""),
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("TTS error for 'walk'"));
    assert!(matches!(
        err.downcast_ref::<SynthesisError>(),
        Some(SynthesisError::Service { status: 429 })
    ));
    assert!(temp.path().join("run.mp3").exists());
    assert!(!temp.path().join("walk.mp3").exists());
    assert!(!temp.path().join("jump.mp3").exists());
}

#[tokio::test]
async fn test_unsupported_language_aborts() {
    let temp = TempDir::new().unwrap();
    let voices = VoiceMap::new().with_voice("en-US", Voice::new("en-US-JennyNeural", "Female"));
    let synth = MemorySynthesizer::with_voices(voices);

    let err = generate_audio(
        &synth,
        &NormalizerRegistry::new(),
        &lines(&["你好"]),
        &job(&temp, "zh-CN", ""),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SynthesisError>(),
        Some(SynthesisError::UnsupportedLanguage(lang)) if lang == "zh-CN"
    ));
    assert!(!temp.path().join("你好.mp3").exists());
}
