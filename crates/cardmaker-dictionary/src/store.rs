use std::path::Path;

use cardmaker_core::{DefinitionLookup, StoreError};
use libsql::{Builder, Connection, Database, params};

use crate::error::DictionaryError;
use crate::loaders::xml::RawEntry;

/// Statements creating the store, run in order
const CREATE_SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS dictionary (
        id INTEGER NOT NULL PRIMARY KEY,
        word VARCHAR(64) NOT NULL,
        definition TEXT NOT NULL
    )"#,
    r#"CREATE INDEX IF NOT EXISTS dictionary_word ON dictionary (word)"#,
];

const INSERT_ENTRY: &str = "INSERT INTO dictionary (id, word, definition) VALUES (?1, ?2, ?3)";

const SELECT_DEFINITIONS: &str =
    "SELECT definition FROM dictionary WHERE word = ?1 COLLATE NOCASE ORDER BY id";

/// Dictionary store backed by a local SQLite file
pub struct SqliteStore {
    _db: Database,
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing store for lookups
    pub async fn open(path: &Path) -> Result<Self, DictionaryError> {
        if !path.exists() {
            return Err(DictionaryError::StoreNotFound(path.to_path_buf()));
        }

        Self::connect(path).await
    }

    /// Open or create a store and make sure the schema exists
    pub async fn create(path: &Path) -> Result<Self, DictionaryError> {
        let store = Self::connect(path).await?;
        for statement in CREATE_SCHEMA {
            store.conn.execute(statement, ()).await?;
        }

        Ok(store)
    }

    async fn connect(path: &Path) -> Result<Self, DictionaryError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        Ok(Self { _db: db, conn })
    }

    pub async fn insert(&self, entry: &RawEntry) -> Result<(), DictionaryError> {
        self.conn
            .execute(
                INSERT_ENTRY,
                params![entry.id, entry.word.clone(), entry.definition.clone()],
            )
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DictionaryError> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM dictionary", ()).await?;

        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)? as u64),
            None => Ok(0),
        }
    }

    /// All stored rows in id order
    pub async fn entries(&self) -> Result<Vec<RawEntry>, DictionaryError> {
        let mut rows = self
            .conn
            .query("SELECT id, word, definition FROM dictionary ORDER BY id", ())
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(RawEntry {
                id: row.get(0)?,
                word: row.get(1)?,
                definition: row.get(2)?,
            });
        }

        Ok(entries)
    }
}

#[async_trait::async_trait]
impl DefinitionLookup for SqliteStore {
    async fn definitions(&self, word: &str) -> Result<Vec<String>, StoreError> {
        let mut rows = self
            .conn
            .query(SELECT_DEFINITIONS, params![word.to_string()])
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut definitions = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        {
            let definition: String = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
            definitions.push(definition);
        }

        Ok(definitions)
    }
}
