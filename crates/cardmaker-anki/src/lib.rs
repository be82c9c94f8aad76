mod split;
mod template;

pub use split::{FIELD_LIMIT, split_field};
pub use template::{SOUND_TEMPLATE, sound_reference};

use std::fs;
use std::path::{Path, PathBuf};

use cardmaker_core::{AnkiRow, AssetKind};

#[derive(Debug, thiserror::Error)]
pub enum AnkiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export write error: {0}")]
    Csv(#[from] csv::Error),
}

pub struct AssembleOptions<'a> {
    /// Directory of `<word>.txt` definition files
    pub definition_dir: &'a Path,
    /// Export file to create (truncated if present)
    pub output: &'a Path,
    /// Audio file name prefix used in sound references
    pub prefix: &'a str,
    pub field_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleReport {
    pub output: PathBuf,
    pub rows: usize,
    pub skipped: usize,
}

/// Card row for one word and its definition text
pub fn build_row(word: &str, prefix: &str, definition: &str, field_limit: usize) -> AnkiRow {
    AnkiRow::new(
        word.to_string(),
        sound_reference(prefix, word),
        split_field(definition, field_limit),
    )
}

/// Write one tab-separated card row per definition file.
///
/// Files are visited in directory listing order. Anything that is not a
/// regular `.txt` file is skipped, as is the export file itself.
pub fn assemble(options: &AssembleOptions<'_>) -> Result<AssembleReport, AnkiError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(options.output)?;

    let extension = AssetKind::Definition.extension();
    let mut rows = 0;
    let mut skipped = 0;

    for entry in fs::read_dir(options.definition_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_definition = entry.file_type()?.is_file()
            && path.extension().is_some_and(|ext| ext == extension)
            && !is_same_file(&path, options.output);
        if !is_definition {
            tracing::debug!("Skipping {}", path.display());
            skipped += 1;
            continue;
        }

        let Some(word) = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()) else {
            skipped += 1;
            continue;
        };

        let bytes = fs::read(&path)?;
        let definition = String::from_utf8_lossy(&bytes);

        let row = build_row(&word, options.prefix, &definition, options.field_limit);
        writer.write_record(row.fields())?;
        rows += 1;
    }

    writer.flush()?;

    Ok(AssembleReport {
        output: options.output.to_path_buf(),
        rows,
        skipped,
    })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
