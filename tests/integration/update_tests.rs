use crate::common::{article_page, listing_page, mount_page, test_collector};
use gnawer::collector::run_update;
use gnawer::config::LinkResolution;
use gnawer::storage::{SqliteStorage, Storage};
use gnawer::Task;
use wiremock::MockServer;

const FEED_WITH_LINKLESS_ENTRY: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Feed</title>
    <link>https://feed.example.com/</link>
    <description>d</description>
    <item>
      <title>Linked</title>
      <link>https://feed.example.com/1</link>
      <description>Has a link</description>
    </item>
    <item>
      <title>Unlinked</title>
      <description>Has no link</description>
    </item>
  </channel>
</rss>"#;

#[tokio::test]
async fn test_update_continues_past_failing_task() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/broken", 500, "down").await;
    mount_page(&server, "/feed.xml", 200, FEED_WITH_LINKLESS_ENTRY).await;
    mount_page(
        &server,
        "/list",
        200,
        &listing_page(&[format!("{}/story", base)]),
    )
    .await;
    mount_page(&server, "/story", 200, &article_page("Story", "Body")).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("db").join("news.db");
    let mut storage = SqliteStorage::new(&db_path).expect("Failed to open DB");

    storage
        .upsert_task(&Task::rss("broken", format!("{}/broken", base)))
        .unwrap();
    storage
        .upsert_task(&Task::rss("feed", format!("{}/feed.xml", base)))
        .unwrap();
    storage
        .upsert_task(&Task::html(
            "list",
            format!("{}/list", base),
            "a.item",
            "h1.title",
            "div.body",
        ))
        .unwrap();

    let collector = test_collector(LinkResolution::Selector);
    let report = run_update(&mut storage, &collector)
        .await
        .expect("Update failed");

    assert_eq!(report.tasks_processed, 3);
    assert_eq!(report.failed_tasks.len(), 1);
    assert_eq!(report.failed_tasks[0].0, "broken");

    let urls: Vec<String> = report.saved.iter().map(|a| a.url.clone()).collect();
    assert_eq!(
        urls,
        vec!["https://feed.example.com/1".to_string(), format!("{}/story", base)]
    );
    assert_eq!(report.articles_in_store, 2);
    assert_eq!(storage.count_articles().unwrap(), 2);
    let first_seen: Vec<_> = storage
        .list_stored_articles(&[])
        .unwrap()
        .into_iter()
        .map(|stored| stored.collected_at)
        .collect();

    // A second run stores the same articles without duplicating them
    let second = run_update(&mut storage, &collector)
        .await
        .expect("Second update failed");
    assert_eq!(second.articles_in_store, 2);
    let seen_again: Vec<_> = storage
        .list_stored_articles(&[])
        .unwrap()
        .into_iter()
        .map(|stored| stored.collected_at)
        .collect();
    assert_eq!(seen_again, first_seen);

    let found = storage.list_articles(&["Story".to_string()]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].content, "Body");

    storage.close().unwrap();
}
