use crate::common::{article_page, listing_page, mount_page, test_collector};
use gnawer::config::LinkResolution;
use gnawer::{Article, GnawerError, Task};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_task(url: String) -> Task {
    Task::html("listing", url, "a.item", "h1.title", "div.body")
}

#[tokio::test]
async fn test_html_partial_success_keeps_listing_order() {
    let server = MockServer::start().await;
    let base = server.uri();

    let hrefs: Vec<String> = (1..=4).map(|i| format!("{}/a/{}", base, i)).collect();
    mount_page(&server, "/", 200, &listing_page(&hrefs)).await;
    mount_page(&server, "/a/1", 200, &article_page("First", "Body one")).await;
    mount_page(&server, "/a/2", 404, "not found").await;
    mount_page(&server, "/a/3", 200, "<html><body><p>no title here</p></body></html>").await;
    mount_page(&server, "/a/4", 200, &article_page("Fourth", "Body four")).await;

    let collector = test_collector(LinkResolution::Selector);
    let articles = collector
        .collect(&html_task(format!("{}/", base)))
        .await
        .expect("Collection failed");

    assert_eq!(
        articles,
        vec![
            Article::new(format!("{}/a/1", base), "First", "Body one"),
            Article::new(format!("{}/a/4", base), "Fourth", "Body four"),
        ]
    );
}

#[tokio::test]
async fn test_html_link_selector_miss_returns_no_articles() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        200,
        "<html><body><p>Nothing to see</p></body></html>",
    )
    .await;

    let collector = test_collector(LinkResolution::Selector);
    let articles = collector
        .collect(&html_task(format!("{}/", server.uri())))
        .await
        .expect("Collection failed");

    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_html_relative_link_is_skipped_in_selector_mode() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        200,
        &listing_page(&["article/1".to_string()]),
    )
    .await;

    // "article/1" is not a request URI, and neither is "a.item/article/1"
    Mock::given(method("GET"))
        .and(path("/article/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page("T", "B")))
        .expect(0)
        .mount(&server)
        .await;

    let collector = test_collector(LinkResolution::Selector);
    let articles = collector
        .collect(&html_task(format!("{}/", server.uri())))
        .await
        .expect("Collection failed");

    assert!(articles.is_empty());

    // Only the listing page was requested
    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/");
}

#[tokio::test]
async fn test_html_relative_link_resolves_in_page_mode() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/news/",
        200,
        &listing_page(&["story".to_string(), "/other/2".to_string()]),
    )
    .await;
    mount_page(&server, "/news/story", 200, &article_page("Story", "Told")).await;
    mount_page(&server, "/other/2", 200, &article_page("Other", "Elsewhere")).await;

    let collector = test_collector(LinkResolution::Page);
    let articles = collector
        .collect(&html_task(format!("{}/news/", base)))
        .await
        .expect("Collection failed");

    assert_eq!(
        articles,
        vec![
            Article::new(format!("{}/news/story", base), "Story", "Told"),
            Article::new(format!("{}/other/2", base), "Other", "Elsewhere"),
        ]
    );
}

#[tokio::test]
async fn test_html_listing_failure_is_an_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/", 500, "boom").await;

    let collector = test_collector(LinkResolution::Selector);
    let result = collector
        .collect(&html_task(format!("{}/", server.uri())))
        .await;

    match result {
        Err(GnawerError::Status { status_code, .. }) => assert_eq!(status_code, 500),
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_html_unreachable_listing_is_a_network_error() {
    let collector = test_collector(LinkResolution::Selector);
    let result = collector
        .collect(&html_task("http://127.0.0.1:1/".to_string()))
        .await;

    assert!(matches!(result, Err(GnawerError::Network { .. })));
}
