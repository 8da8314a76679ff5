#![forbid(unsafe_code)]

pub mod error;

use dm_core::DocKey;
use self::error::StoreError;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

/// One row of the shared `documents` table.
///
/// `filename` is the reconciler's key and is nullable: rows authored through
/// the viewer carry no filename and are invisible to the sync's pruning.
#[derive(Clone, Debug)]
pub struct DocumentRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub filename: Option<String>,
    pub size: u64,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Copy, Debug)]
pub struct NewDocument<'a> {
    pub key: &'a DocKey,
    pub title: &'a str,
    pub content: &'a str,
    pub category: &'a str,
    pub size: u64,
}

/// Fields rewritten on every sync of an existing row. `id`, `filename` and
/// `created_at_ms` are deliberately absent: identity never changes after the
/// first insert.
#[derive(Clone, Copy, Debug)]
pub struct DocumentPatch<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub category: &'a str,
    pub size: u64,
}

/// Destination gateway contract. Each operation is individually atomic; there
/// is no run-wide transaction, so a crash mid-run leaves every row either
/// fully written or untouched and the run is safely repeatable.
pub trait DocumentStore {
    fn find_by_key(&self, key: &DocKey) -> Result<Option<DocumentRow>, StoreError>;
    fn insert(&mut self, doc: &NewDocument<'_>) -> Result<i64, StoreError>;
    fn update(&mut self, id: i64, patch: &DocumentPatch<'_>) -> Result<(), StoreError>;
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;
    /// Rows in one category whose filename is non-null, i.e. the slice of the
    /// table a reconciler may own.
    fn list_by_partition(&self, category: &str) -> Result<Vec<DocumentRow>, StoreError>;
}

#[derive(Debug)]
pub struct SqliteStore {
    storage_dir: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;
        let db_path = storage_dir.join("docmirror.db");
        let conn = Connection::open(db_path)?;
        let store = Self { storage_dir, conn };
        store.migrate()?;
        Ok(store)
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Lookup by store-assigned id, the viewer's access path.
    pub fn find_by_id(&self, id: i64) -> Result<Option<DocumentRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                r#"
                SELECT id, title, content, category, filename, size, created_at_ms, updated_at_ms
                FROM documents
                WHERE id = ?1
                "#,
                params![id],
                row_to_document,
            )
            .optional()?)
    }

    /// Insert a database-authored row (no filename). The viewer creates these;
    /// the reconciler must coexist with them without ever touching them.
    pub fn insert_viewer_document(
        &mut self,
        title: &str,
        content: &str,
        category: &str,
    ) -> Result<i64, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::InvalidInput("title must not be empty"));
        }
        let now_ms = now_ms();
        self.conn.execute(
            r#"
            INSERT INTO documents(title, content, category, filename, size, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, NULL, ?4, ?5, ?6)
            "#,
            params![title, content, category, content.len() as i64, now_ms, now_ms],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS meta (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS documents (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              title TEXT NOT NULL,
              content TEXT NOT NULL,
              category TEXT NOT NULL,
              filename TEXT UNIQUE,
              size INTEGER NOT NULL,
              created_at_ms INTEGER NOT NULL,
              updated_at_ms INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_category ON documents(category);
            "#,
        )?;
        self.conn.execute(
            "INSERT OR IGNORE INTO meta(key, value) VALUES (?1, ?2)",
            params!["schema_version", "v1"],
        )?;
        Ok(())
    }
}

impl DocumentStore for SqliteStore {
    fn find_by_key(&self, key: &DocKey) -> Result<Option<DocumentRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                r#"
                SELECT id, title, content, category, filename, size, created_at_ms, updated_at_ms
                FROM documents
                WHERE filename = ?1
                "#,
                params![key.as_str()],
                row_to_document,
            )
            .optional()?)
    }

    fn insert(&mut self, doc: &NewDocument<'_>) -> Result<i64, StoreError> {
        let now_ms = now_ms();
        self.conn.execute(
            r#"
            INSERT INTO documents(title, content, category, filename, size, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                doc.title,
                doc.content,
                doc.category,
                doc.key.as_str(),
                doc.size as i64,
                now_ms,
                now_ms
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&mut self, id: i64, patch: &DocumentPatch<'_>) -> Result<(), StoreError> {
        let now_ms = now_ms();
        let updated = self.conn.execute(
            r#"
            UPDATE documents
            SET title = ?2, content = ?3, category = ?4, size = ?5, updated_at_ms = ?6
            WHERE id = ?1
            "#,
            params![
                id,
                patch.title,
                patch.content,
                patch.category,
                patch.size as i64,
                now_ms
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM documents WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        Ok(())
    }

    fn list_by_partition(&self, category: &str) -> Result<Vec<DocumentRow>, StoreError> {
        if category.trim().is_empty() {
            return Err(StoreError::InvalidInput("category must not be empty"));
        }
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, title, content, category, filename, size, created_at_ms, updated_at_ms
            FROM documents
            WHERE category = ?1 AND filename IS NOT NULL
            ORDER BY filename ASC
            "#,
        )?;
        let rows = stmt.query_map(params![category], row_to_document)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn row_to_document(row: &rusqlite::Row<'_>) -> Result<DocumentRow, rusqlite::Error> {
    Ok(DocumentRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        category: row.get(3)?,
        filename: row.get(4)?,
        size: row.get::<_, i64>(5)?.max(0) as u64,
        created_at_ms: row.get(6)?,
        updated_at_ms: row.get(7)?,
    })
}

fn now_ms() -> i64 {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    now.as_millis() as i64
}
