//! Update run: collect every stored task and upsert the results

use crate::collector::Collector;
use crate::model::Article;
use crate::storage::Storage;

/// What an update run did
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Number of tasks that were collected
    pub tasks_processed: usize,

    /// Tasks whose listing page or feed failed, with the error message
    pub failed_tasks: Vec<(String, String)>,

    /// Articles written to the store, in collection order
    pub saved: Vec<Article>,

    /// Number of articles in the store once the run finished
    pub articles_in_store: u64,
}

/// Runs collection for every stored task and stores the articles
///
/// Tasks run one after another. A task that fails to collect is logged and
/// recorded in the report; the run moves on to the next task. Storage
/// errors abort the run.
///
/// # Arguments
///
/// * `storage` - The article/task store
/// * `collector` - The collector used for every task
pub async fn run_update(
    storage: &mut dyn Storage,
    collector: &Collector,
) -> crate::Result<UpdateReport> {
    let tasks = storage.list_tasks()?;
    tracing::info!("Updating {} tasks", tasks.len());

    let mut report = UpdateReport::default();

    for task in tasks {
        report.tasks_processed += 1;

        let articles = match collector.collect(&task).await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!("Task {} failed: {}", task.name, e);
                report.failed_tasks.push((task.name.clone(), e.to_string()));
                continue;
            }
        };

        tracing::info!("Task {}: {} articles", task.name, articles.len());

        for article in articles {
            if article.url.is_empty() {
                tracing::warn!(
                    "Task {}: skipping {:?}, it has no link",
                    task.name,
                    article.title
                );
                continue;
            }
            storage.upsert_article(&article)?;
            report.saved.push(article);
        }
    }

    report.articles_in_store = storage.count_articles()?;
    Ok(report)
}
