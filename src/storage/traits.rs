//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::model::{Article, StoredArticle, Task};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// Every write is a single atomic upsert keyed by the record's unique field
/// (`name` for tasks, `url` for articles).
pub trait Storage {
    // ===== Tasks =====

    /// Inserts a task, or fully replaces the task with the same name
    fn upsert_task(&mut self, task: &Task) -> StorageResult<()>;

    /// Gets a task by name
    fn get_task(&self, name: &str) -> StorageResult<Option<Task>>;

    /// Lists all tasks in the order they were first added
    fn list_tasks(&self) -> StorageResult<Vec<Task>>;

    // ===== Articles =====

    /// Inserts an article, or replaces title and content of the article
    /// with the same URL
    fn upsert_article(&mut self, article: &Article) -> StorageResult<()>;

    /// Lists stored articles whose title contains every keyword
    ///
    /// Matching is case-sensitive. With no keywords, every article is
    /// returned. Results are in the order articles were first stored.
    fn list_stored_articles(&self, keywords: &[String]) -> StorageResult<Vec<StoredArticle>>;

    /// Same as [`Storage::list_stored_articles`], without the first-seen times
    fn list_articles(&self, keywords: &[String]) -> StorageResult<Vec<Article>> {
        Ok(self
            .list_stored_articles(keywords)?
            .into_iter()
            .map(|stored| stored.article)
            .collect())
    }

    /// Counts stored articles
    fn count_articles(&self) -> StorageResult<u64>;
}
