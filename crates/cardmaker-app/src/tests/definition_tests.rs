use cardmaker_core::ResolveError;
use cardmaker_dictionary::DefinitionResolver;
use tempfile::TempDir;

use super::{CountingLookup, lines};
use crate::generate::{DefinitionJob, generate_definitions};

#[tokio::test]
async fn test_fallback_definitions_are_filed_under_canonical_word() {
    let temp = TempDir::new().unwrap();
    let resolver = DefinitionResolver::new(CountingLookup::new(&[
        ("bar", "<d>first</d>"),
        ("bar", "<d>second</d>"),
    ]));

    let report = generate_definitions(
        &resolver,
        &lines(&["foo,bar"]),
        &DefinitionJob {
            output: temp.path(),
        },
    )
    .await
    .unwrap();

    assert_eq!(report.generated, 1);
    assert_eq!(
        std::fs::read_to_string(temp.path().join("foo.txt")).unwrap(),
        "<d>first</d>\n<d>second</d>"
    );
    assert!(!temp.path().join("bar.txt").exists());
    assert_eq!(resolver.lookup().queries(), vec!["foo", "bar"]);
}

#[tokio::test]
async fn test_unknown_word_is_skipped() {
    let temp = TempDir::new().unwrap();
    let resolver = DefinitionResolver::new(CountingLookup::new(&[("run", "<d>to move fast</d>")]));

    let report = generate_definitions(
        &resolver,
        &lines(&["zzz,qqq", "run"]),
        &DefinitionJob {
            output: temp.path(),
        },
    )
    .await
    .unwrap();

    assert_eq!(report.not_found, 1);
    assert_eq!(report.generated, 1);
    assert!(!temp.path().join("zzz.txt").exists());
    assert!(temp.path().join("run.txt").exists());
}

#[tokio::test]
async fn test_existing_file_skips_lookup() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("run.txt"), "kept").unwrap();

    let resolver = DefinitionResolver::new(CountingLookup::new(&[("run", "<d>new</d>")]));
    let report = generate_definitions(
        &resolver,
        &lines(&["run"]),
        &DefinitionJob {
            output: temp.path(),
        },
    )
    .await
    .unwrap();

    assert_eq!(report.skipped, 1);
    assert!(resolver.lookup().queries().is_empty());
    assert_eq!(
        std::fs::read_to_string(temp.path().join("run.txt")).unwrap(),
        "kept"
    );
}

#[tokio::test]
async fn test_storage_failure_aborts() {
    let temp = TempDir::new().unwrap();
    let resolver = DefinitionResolver::new(CountingLookup::unavailable());

    let err = generate_definitions(
        &resolver,
        &lines(&["run", "walk"]),
        &DefinitionJob {
            output: temp.path(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ResolveError>(),
        Some(ResolveError::Storage(_))
    ));
    assert_eq!(resolver.lookup().queries(), vec!["run"]);
}
