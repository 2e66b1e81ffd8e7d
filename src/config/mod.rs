//! Configuration module for Gnawer
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so an empty file (or no file
//! at all) is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use gnawer::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gnawer.toml")).unwrap();
//! println!("Articles are stored in {}", config.storage.database_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CollectorConfig, Config, FetchConfig, LinkResolution, StorageConfig, UserAgentConfig,
};

pub use parser::{load_config, parse_config};
pub use validation::validate;
