use crate::common::{mount_page, test_collector};
use gnawer::config::LinkResolution;
use gnawer::{Article, GnawerError, Task};
use wiremock::MockServer;

const RSS_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Example News</title>
    <link>https://news.example.com/</link>
    <description>Everything</description>
    <item>
      <title>Full story</title>
      <link>https://news.example.com/1</link>
      <description>Short summary</description>
      <content:encoded><![CDATA[<p>The whole story</p>]]></content:encoded>
    </item>
    <item>
      <title>Summary only</title>
      <link>https://news.example.com/2</link>
      <description>Just the summary</description>
    </item>
  </channel>
</rss>"#;

const ATOM_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Atom</title>
  <id>urn:example:feed</id>
  <updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:example:1</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <link rel="alternate" href="https://atom.example.com/1"/>
    <summary>Atom summary</summary>
  </entry>
</feed>"#;

#[tokio::test]
async fn test_rss_prefers_content_over_description() {
    let server = MockServer::start().await;
    mount_page(&server, "/rss.xml", 200, RSS_FEED).await;

    let collector = test_collector(LinkResolution::Selector);
    let articles = collector
        .collect(&Task::rss("feed", format!("{}/rss.xml", server.uri())))
        .await
        .expect("Collection failed");

    assert_eq!(
        articles,
        vec![
            Article::new("https://news.example.com/1", "Full story", "<p>The whole story</p>"),
            Article::new("https://news.example.com/2", "Summary only", "Just the summary"),
        ]
    );
}

#[tokio::test]
async fn test_atom_feed_is_collected() {
    let server = MockServer::start().await;
    mount_page(&server, "/atom.xml", 200, ATOM_FEED).await;

    let collector = test_collector(LinkResolution::Selector);
    let articles = collector
        .collect(&Task::rss("atom", format!("{}/atom.xml", server.uri())))
        .await
        .expect("Collection failed");

    assert_eq!(
        articles,
        vec![Article::new(
            "https://atom.example.com/1",
            "Atom entry",
            "Atom summary"
        )]
    );
}

#[tokio::test]
async fn test_rss_garbage_is_a_feed_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/rss.xml", 200, "<html>not a feed</html>").await;

    let collector = test_collector(LinkResolution::Selector);
    let result = collector
        .collect(&Task::rss("feed", format!("{}/rss.xml", server.uri())))
        .await;

    assert!(matches!(result, Err(GnawerError::Feed { .. })));
}

#[tokio::test]
async fn test_rss_not_found_is_a_status_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/rss.xml", 404, "").await;

    let collector = test_collector(LinkResolution::Selector);
    let result = collector
        .collect(&Task::rss("feed", format!("{}/rss.xml", server.uri())))
        .await;

    assert!(matches!(
        result,
        Err(GnawerError::Status {
            status_code: 404,
            ..
        })
    ));
}
