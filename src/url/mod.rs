//! URL handling module for Gnawer
//!
//! This module provides request-URI validation, used to gate link following
//! and to check task URLs, and the rules for turning listing-page hrefs into
//! fetchable article URLs.

mod resolve;
mod validate;

// Re-export main functions
pub use resolve::{clean_path, join_path, resolve_link};
pub use validate::is_valid_url;
