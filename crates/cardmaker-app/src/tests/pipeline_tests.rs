use cardmaker_anki::{AssembleOptions, FIELD_LIMIT, assemble};
use cardmaker_dictionary::{DefinitionResolver, EntryFormat, SqliteStore, build_store};
use tempfile::TempDir;

use crate::generate::{DefinitionJob, generate_definitions, read_word_lines};

const DICTIONARY: &str = r#"<dictionary>
<d title="run">to move fast</d>
<d title="walk">to move slowly</d>
</dictionary>"#;

#[tokio::test]
async fn test_dictionary_to_card_row() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("dict.xml");
    let db = temp.path().join("dict.db");
    let definitions = temp.path().join("definition");
    let words = temp.path().join("words.txt");
    std::fs::write(&source, DICTIONARY).unwrap();
    std::fs::write(&words, "RUN\nmissing\n").unwrap();
    std::fs::create_dir(&definitions).unwrap();

    let format = EntryFormat {
        entry_tag: "d".to_string(),
        title_attr: "title".to_string(),
    };
    build_store(&source, &db, &format).await.unwrap();

    let resolver = DefinitionResolver::new(SqliteStore::open(&db).await.unwrap());
    let lines = read_word_lines(&words).await.unwrap();
    let report = generate_definitions(
        &resolver,
        &lines,
        &DefinitionJob {
            output: &definitions,
        },
    )
    .await
    .unwrap();
    assert_eq!(report.generated, 1);
    assert_eq!(report.not_found, 1);

    let output = temp.path().join("anki.txt");
    let assembled = assemble(&AssembleOptions {
        definition_dir: &definitions,
        output: &output,
        prefix: "",
        field_limit: FIELD_LIMIT,
    })
    .unwrap();
    assert_eq!(assembled.rows, 1);

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "RUN\t[sound:RUN.mp3]\t\"<d xml:space=\"\"preserve\"\">to move fast</d>\"\t\t\n"
    );
}

#[tokio::test]
async fn test_read_word_lines_drops_blank_lines() {
    let temp = TempDir::new().unwrap();
    let words = temp.path().join("words.txt");
    std::fs::write(&words, "run\n\n  \nfoo, bar\r\n,orphan\n").unwrap();

    let lines = read_word_lines(&words).await.unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].canonical(), "run");
    assert_eq!(lines[1].variants, vec!["foo", "bar"]);
}

#[tokio::test]
async fn test_missing_word_list_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = read_word_lines(&temp.path().join("absent.txt"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to read word list"));
}
