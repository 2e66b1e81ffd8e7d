use crate::collector::dom::{Document, DomError, HtmlDocument};
use crate::collector::extractor::{extract_article, ExtractOutcome};
use crate::collector::fetcher::{fetch_url, FetchResult};
use crate::collector::Collector;
use crate::model::{Article, Task};
use crate::url::resolve_link;
use futures::stream::{self, StreamExt};
use url::Url;

impl Collector {
    /// Collects articles from an HTML listing page
    ///
    /// # Flow
    ///
    /// 1. Fetch `task.url`; any failure here is returned as an error
    /// 2. Read the `href` of every element matching `task.link` and resolve
    ///    it into a candidate URL (unresolvable candidates are skipped)
    /// 3. Fetch and extract every candidate through a bounded worker pool
    /// 4. Keep the extracted articles in listing order
    ///
    /// A candidate that cannot be fetched, or whose page does not match the
    /// title/content selectors, is dropped without failing the task.
    pub async fn collect_html(&self, task: &Task) -> crate::Result<Vec<Article>> {
        let (page_url, body) = fetch_url(&self.client, &task.url)
            .await
            .into_success(&task.url)?;

        let candidates = self.candidate_urls(task, &page_url, &body)?;
        tracing::debug!(
            "Task {}: {} candidate links on {}",
            task.name,
            candidates.len(),
            page_url
        );

        let articles: Vec<Article> = stream::iter(candidates)
            .map(|url| self.collect_article(task, url))
            .buffered(self.config.max_concurrent_fetches.max(1))
            .filter_map(|outcome| async move { outcome.into_article() })
            .collect()
            .await;

        tracing::debug!("Task {}: {} articles extracted", task.name, articles.len());
        Ok(articles)
    }

    /// Resolves the listing page's link hrefs into fetchable URLs
    fn candidate_urls(
        &self,
        task: &Task,
        page_url: &Url,
        body: &str,
    ) -> Result<Vec<String>, DomError> {
        let document = HtmlDocument::parse(body);
        let hrefs = document.find_attr(&task.link, "href")?;

        Ok(hrefs
            .into_iter()
            .flatten()
            .filter_map(|href| {
                let resolved =
                    resolve_link(&href, &task.link, page_url, self.config.link_resolution);
                if resolved.is_none() {
                    tracing::debug!("Skipping unresolvable link {:?}", href);
                }
                resolved
            })
            .collect())
    }

    /// Fetches one candidate page and extracts its article
    async fn collect_article(&self, task: &Task, url: String) -> ExtractOutcome {
        let outcome = match fetch_url(&self.client, &url).await {
            FetchResult::Success { body, .. } => {
                let document = HtmlDocument::parse(&body);
                extract_article(task, &url, &document, self.config.text_width)
            }
            FetchResult::HttpError { status_code } => {
                ExtractOutcome::Failed(format!("status code {}", status_code))
            }
            FetchResult::NetworkError { error } => ExtractOutcome::Failed(error),
        };

        match &outcome {
            ExtractOutcome::Extracted(article) => {
                tracing::trace!("Extracted {:?} from {}", article.title, url)
            }
            ExtractOutcome::NoMatch => tracing::debug!("No article found at {}", url),
            ExtractOutcome::Failed(reason) => tracing::debug!("Skipping {}: {}", url, reason),
        }

        outcome
    }
}
