//! Collector module: turns tasks into articles
//!
//! This module contains the article-collection engine, including:
//! - HTTP fetching with per-request deadlines
//! - Feed parsing (RSS 2.0 and Atom)
//! - Selector-driven article extraction from HTML pages
//! - The HTML and RSS collection strategies and the dispatcher between them
//! - The update run that stores what was collected

mod dom;
mod extractor;
mod feed;
mod fetcher;
mod html;
mod rss;
mod runner;

pub use dom::{parse_selector, Document, DomError, HtmlDocument};
pub use extractor::{extract_article, ExtractOutcome};
pub use feed::{parse_feed, FeedDocument, FeedEntry};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use runner::{run_update, UpdateReport};

use crate::config::{CollectorConfig, Config};
use crate::model::{Article, Task, TaskKind};
use reqwest::Client;

/// Collects articles for tasks
///
/// Holds the HTTP client and collection settings; it keeps no state between
/// calls, so one instance serves every task of a run.
#[derive(Debug, Clone)]
pub struct Collector {
    client: Client,
    config: CollectorConfig,
}

impl Collector {
    /// Creates a collector from the full configuration
    ///
    /// Fails with [`GnawerError::Client`](crate::GnawerError::Client) when the
    /// HTTP client cannot be built, e.g. for a user agent that is not a valid
    /// header value.
    pub fn new(config: &Config) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent, &config.fetch)?;
        Ok(Self::with_client(client, config.collector.clone()))
    }

    /// Creates a collector around an existing HTTP client
    pub fn with_client(client: Client, config: CollectorConfig) -> Self {
        Self { client, config }
    }

    /// Collects articles for one task, picking the strategy from its kind
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Article>)` - Collected articles, possibly none
    /// * `Err(GnawerError)` - The listing page or feed could not be fetched or parsed
    pub async fn collect(&self, task: &Task) -> crate::Result<Vec<Article>> {
        match task.kind {
            TaskKind::Rss => self.collect_rss(task).await,
            TaskKind::Html => self.collect_html(task).await,
        }
    }
}
