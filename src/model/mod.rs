//! Data model for Gnawer
//!
//! # Components
//!
//! - `Task`: a stored rule describing one content source
//! - `TaskKind`: which collector strategy a task uses
//! - `Article`: a single normalized news item
//! - `StoredArticle`: an article as kept in the store, with its first-seen time

mod task;

use chrono::{DateTime, Utc};

pub use task::{Task, TaskError, TaskKind};

/// A single extracted news item
///
/// `url` is the unique storage key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// An article read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArticle {
    pub article: Article,

    /// When the article's URL was first stored
    pub collected_at: DateTime<Utc>,
}
