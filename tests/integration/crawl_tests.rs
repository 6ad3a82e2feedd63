//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use doc_scribe::config::{CrawlerConfig, UserAgentConfig};
use doc_scribe::crawler::{scrape, Coordinator, HttpFetcher};
use doc_scribe::output::format_report;
use doc_scribe::state::{CrawlSession, CrawlState};
use doc_scribe::ScribeError;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_agent() -> UserAgentConfig {
    UserAgentConfig {
        crawler_name: "TestScribe".to_string(),
        crawler_version: "1.0".to_string(),
        request_timeout_secs: 5,
    }
}

/// Crawler settings with no delay between requests
fn crawler_config(max_pages: u32) -> CrawlerConfig {
    CrawlerConfig {
        max_pages,
        delay_ms: 0,
        ..CrawlerConfig::default()
    }
}

fn coordinator(seed: &str, output_dir: &Path, crawler: &CrawlerConfig) -> Coordinator {
    let session = CrawlSession::new(seed, output_dir, crawler).expect("valid seed");
    Coordinator::new(session, &user_agent()).expect("HTTP client")
}

/// Mounts a GET route that serves `body` as HTML exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn sorted_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("output dir exists")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let output = TempDir::new().unwrap();

    mount_page(
        &server,
        "/",
        &format!(
            r##"<html><head><title>Home</title><script>analytics()</script></head><body>
            <h1>Welcome</h1>
            <a href="/page1">Page 1</a>
            <a href="{}/page2">Page 2</a>
            <a href="http://other.example/elsewhere">External</a>
            <a href="#content">Skip</a>
            <a href="javascript:void(0)">Menu</a>
            </body></html>"##,
            base_url
        ),
        1,
    )
    .await;
    mount_page(
        &server,
        "/page1",
        r#"<html><body><p>First page</p><a href="/">Home</a><a href="page2">Next</a></body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/page2",
        r#"<html><body><p>Second page</p><a href="/page1">Back</a></body></html>"#,
        1,
    )
    .await;

    let seed = format!("{}/", base_url);
    let report = coordinator(&seed, output.path(), &crawler_config(100))
        .run()
        .await
        .expect("crawl runs");

    assert_eq!(report.state, CrawlState::Completed);
    assert_eq!(report.pages_processed, 3);
    assert_eq!(report.pages_failed, 0);
    assert_eq!(report.queue_remaining, 0);
    assert_eq!(
        sorted_files(output.path()),
        vec!["index.md", "page1.md", "page2.md"]
    );

    let index = std::fs::read_to_string(output.path().join("index.md")).unwrap();
    assert!(index.contains("Welcome"));
    assert!(!index.contains("analytics()"));
    assert!(!index.contains("<h1>"));
}

#[tokio::test]
async fn test_dead_link_is_not_counted() {
    let server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    mount_page(
        &server,
        "/",
        r#"<a href="/missing">Missing</a><a href="/ok">Ok</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/ok", r#"<a href="/missing">Missing again</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let report = coordinator(&seed, output.path(), &crawler_config(100))
        .run()
        .await
        .unwrap();

    assert_eq!(report.pages_processed, 2);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(sorted_files(output.path()), vec!["index.md", "ok.md"]);
}

#[tokio::test]
async fn test_child_pages_only() {
    let server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    mount_page(
        &server,
        "/docs/",
        r#"<a href="docs/guide">Guide</a><a href="/blog/post">Blog</a><a href="/docs/api">API</a><a href="faq">FAQ</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/docs/guide", "<p>Guide</p>", 1).await;
    // "faq" on /docs/ resolves against dirname, landing outside the seed
    mount_page(&server, "/faq", "<p>FAQ</p>", 0).await;
    mount_page(&server, "/docs/api", "<p>API</p>", 1).await;
    mount_page(&server, "/blog/post", "<p>Blog</p>", 0).await;

    let seed = format!("{}/docs/", server.uri());
    let crawler = CrawlerConfig {
        child_pages_only: true,
        ..crawler_config(100)
    };
    let report = coordinator(&seed, output.path(), &crawler)
        .run()
        .await
        .unwrap();

    assert_eq!(report.pages_processed, 3);
    assert_eq!(
        sorted_files(output.path()),
        vec!["docs_.md", "docs_api.md", "docs_guide.md"]
    );
}

#[tokio::test]
async fn test_page_limit_reported() {
    let server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    mount_page(
        &server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/a", "<p>A</p>", 1).await;
    mount_page(&server, "/b", "<p>B</p>", 0).await;
    mount_page(&server, "/c", "<p>C</p>", 0).await;

    let seed = format!("{}/", server.uri());
    let report = coordinator(&seed, output.path(), &crawler_config(2))
        .run()
        .await
        .unwrap();

    assert_eq!(report.pages_processed, 2);
    assert_eq!(report.queue_remaining, 2);
    assert!(report.limit_reached());

    let summary = format_report(&report);
    assert!(summary.contains("Crawling completed. Processed 2 pages."));
    assert!(summary.contains("URLs remaining in queue: 2"));
    assert!(summary.contains("Maximum page limit (2) reached"));
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestScribe/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Hi</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let seed = format!("{}/", server.uri());
    let report = coordinator(&seed, output.path(), &crawler_config(10))
        .run()
        .await
        .unwrap();

    assert_eq!(report.pages_processed, 1);
}

#[tokio::test]
async fn test_output_directory_created() {
    let server = MockServer::start().await;
    let output = TempDir::new().unwrap();
    let nested = output.path().join("archive").join("site");

    mount_page(&server, "/", "<p>Hi</p>", 1).await;

    let seed = format!("{}/", server.uri());
    coordinator(&seed, &nested, &crawler_config(10))
        .run()
        .await
        .unwrap();

    assert_eq!(sorted_files(&nested), vec!["index.md"]);
}

#[tokio::test]
async fn test_scrape_single_page() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/article",
        "<h2>Article</h2><p>Body <em>text</em></p><button>Share</button>",
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::from_config(&user_agent()).unwrap();

    let markdown = scrape(&fetcher, &format!("{}/article", server.uri()))
        .await
        .unwrap();
    assert!(markdown.contains("Article"));
    assert!(markdown.contains("Body *text*") || markdown.contains("Body _text_"));
    assert!(!markdown.contains("Share"));

    let err = scrape(&fetcher, &format!("{}/broken", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, ScribeError::Fetch { .. }));
}
