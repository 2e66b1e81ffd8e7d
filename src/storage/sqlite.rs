//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::model::{Article, StoredArticle, Task, TaskKind};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const TASK_COLUMNS: &str = "name, kind, url, link, title, content";

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `path` and ensures the schema
    ///
    /// Missing parent directories are created.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database
    pub fn new(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Closes the database, reporting any error from the final flush
    pub fn close(self) -> StorageResult<()> {
        self.conn.close().map_err(|(_, e)| StorageError::Sqlite(e))
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let kind: String = row.get(1)?;
    let kind = TaskKind::from_db_string(&kind).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            format!("unknown task kind '{}'", kind).into(),
        )
    })?;

    Ok(Task {
        name: row.get(0)?,
        kind,
        url: row.get(2)?,
        link: row.get(3)?,
        title: row.get(4)?,
        content: row.get(5)?,
    })
}

fn stored_article_from_row(row: &Row<'_>) -> rusqlite::Result<StoredArticle> {
    let collected_at: String = row.get(3)?;
    let collected_at = DateTime::parse_from_rfc3339(&collected_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(StoredArticle {
        article: Article {
            url: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
        },
        collected_at,
    })
}

impl Storage for SqliteStorage {
    // ===== Tasks =====

    fn upsert_task(&mut self, task: &Task) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO tasks (name, kind, url, link, title, content)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(name) DO UPDATE SET
                kind = excluded.kind,
                url = excluded.url,
                link = excluded.link,
                title = excluded.title,
                content = excluded.content",
            params![
                task.name,
                task.kind.to_db_string(),
                task.url,
                task.link,
                task.title,
                task.content
            ],
        )?;
        Ok(())
    }

    fn get_task(&self, name: &str) -> StorageResult<Option<Task>> {
        let task = self
            .conn
            .query_row(
                &format!("SELECT {} FROM tasks WHERE name = ?1", TASK_COLUMNS),
                params![name],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS))?;

        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    // ===== Articles =====

    fn upsert_article(&mut self, article: &Article) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO articles (url, title, content, collected_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(url) DO UPDATE SET title = excluded.title, content = excluded.content",
            params![article.url, article.title, article.content, now],
        )?;
        Ok(())
    }

    fn list_stored_articles(&self, keywords: &[String]) -> StorageResult<Vec<StoredArticle>> {
        let mut query = "SELECT url, title, content, collected_at FROM articles".to_string();
        if !keywords.is_empty() {
            // instr() is case-sensitive, unlike LIKE
            let conditions: Vec<String> = (1..=keywords.len())
                .map(|i| format!("instr(title, ?{}) > 0", i))
                .collect();
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&query)?;
        let articles = stmt
            .query_map(params_from_iter(keywords.iter()), stored_article_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    fn count_articles(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
