use crate::collector::feed::parse_feed;
use crate::collector::fetcher::fetch_url;
use crate::collector::Collector;
use crate::model::{Article, Task};
use crate::GnawerError;

impl Collector {
    /// Collects articles from an RSS or Atom feed
    ///
    /// Every entry becomes an article: its link is the URL, and its full
    /// content is used when present, otherwise its description. Entry text
    /// is taken verbatim.
    pub async fn collect_rss(&self, task: &Task) -> crate::Result<Vec<Article>> {
        let (_, body) = fetch_url(&self.client, &task.url)
            .await
            .into_success(&task.url)?;

        let feed = parse_feed(body.as_bytes()).map_err(|message| GnawerError::Feed {
            url: task.url.clone(),
            message,
        })?;

        let articles: Vec<Article> = feed
            .entries
            .into_iter()
            .map(|entry| {
                let content = if entry.content.is_empty() {
                    entry.description
                } else {
                    entry.content
                };
                Article::new(entry.link, entry.title, content)
            })
            .collect();

        tracing::debug!("Task {}: {} feed entries", task.name, articles.len());
        Ok(articles)
    }
}
