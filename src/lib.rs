//! Gnawer: a small news gnawer
//!
//! This crate turns user-defined tasks (RSS/Atom feeds or HTML listing pages
//! described by CSS selectors) into plain-text articles and keeps them in a
//! local SQLite store for keyword search.

pub mod collector;
pub mod config;
pub mod model;
pub mod storage;
pub mod text;
pub mod url;

use thiserror::Error;

/// Main error type for Gnawer operations
#[derive(Debug, Error)]
pub enum GnawerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid task: {0}")]
    Task(#[from] model::TaskError),

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Status code error for {url}: {status_code}")]
    Status { url: String, status_code: u16 },

    #[error("Feed parse error for {url}: {message}")]
    Feed { url: String, message: String },

    #[error("HTML query error: {0}")]
    Dom(#[from] collector::DomError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Gnawer operations
pub type Result<T> = std::result::Result<T, GnawerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use collector::{Collector, ExtractOutcome};
pub use config::Config;
pub use model::{Article, StoredArticle, Task, TaskKind};
pub use storage::{SqliteStorage, Storage};
pub use text::to_plain_text;
pub use crate::url::is_valid_url;
