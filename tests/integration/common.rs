use gnawer::collector::{build_http_client, Collector};
use gnawer::config::{CollectorConfig, FetchConfig, LinkResolution, UserAgentConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a collector with short deadlines for testing
pub fn test_collector(link_resolution: LinkResolution) -> Collector {
    let user_agent = UserAgentConfig {
        name: "GnawerTest".to_string(),
        version: "1.0.0".to_string(),
    };
    let fetch = FetchConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    let client = build_http_client(&user_agent, &fetch).expect("Failed to build client");

    Collector::with_client(
        client,
        CollectorConfig {
            max_concurrent_fetches: 2,
            link_resolution,
            ..CollectorConfig::default()
        },
    )
}

/// Mounts a GET route answering with the given status and body
pub async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// An article page matching the `h1.title` / `div.body` selectors
pub fn article_page(title: &str, body: &str) -> String {
    format!(
        r#"<html><head><title>{title}</title></head><body>
        <h1 class="title">{title}</h1>
        <div class="body"><p>{body}</p></div>
        </body></html>"#
    )
}

/// A listing page with one `a.item` link per href
pub fn listing_page(hrefs: &[String]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!(r#"<li><a class="item" href="{}">more</a></li>"#, href))
        .collect();
    format!("<html><body><ul>{}</ul></body></html>", links)
}
