//! Integration tests for the sitemap fallback chain.
//!
//! These verify the tier ordering rules against a real HTTP server:
//! - in-page references suppress all network traffic
//! - robots.txt wins before any path probe is attempted
//! - path probes run in their fixed order and stop at the first success
//! - the robots-meta tier sets the flag but does not block URL discovery
//! - network failures are swallowed, never surfaced

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wp_scout::{inspect, PageDocument};

fn page_on(server: &MockServer, html: &str) -> PageDocument {
    let url = Url::parse(&format!("{}/", server.uri())).expect("server url");
    PageDocument::parse(url, html)
}

/// Mounts a zero-expectation mock so any request to the path fails the test.
async fn forbid(server: &MockServer, http_method: &str, route: &str) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn robots_txt_directive_wins_and_no_path_probe_is_attempted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /wp-admin/\nSitemap: https://example.com/custom-sitemap.xml\n",
        ))
        .expect(1)
        .mount(&server)
        .await;

    // None of the five fallback probes may fire
    for route in [
        "/sitemap_index.xml",
        "/sitemap.xml",
        "/wp-sitemap.xml",
        "/post-sitemap.xml",
        "/page-sitemap.xml",
    ] {
        forbid(&server, "HEAD", route).await;
    }

    let page = page_on(&server, "<html><body>no in-page sitemap hints</body></html>");
    let info = inspect(&page, &reqwest::Client::new(), false).await;

    assert!(info.sitemap);
    assert_eq!(
        info.sitemap_url.as_deref(),
        Some("https://example.com/custom-sitemap.xml")
    );
}

#[tokio::test]
async fn path_probes_run_in_order_and_stop_at_first_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // First candidate missing, second present, the rest must not be probed
    Mock::given(method("HEAD"))
        .and(path("/sitemap_index.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    for route in ["/wp-sitemap.xml", "/post-sitemap.xml", "/page-sitemap.xml"] {
        forbid(&server, "HEAD", route).await;
    }

    let page = page_on(&server, "<html></html>");
    let info = inspect(&page, &reqwest::Client::new(), false).await;

    assert!(info.sitemap);
    let url = info.sitemap_url.expect("probe result");
    assert!(url.ends_with("/sitemap.xml"), "unexpected url: {url}");
}

#[tokio::test]
async fn in_page_reference_suppresses_all_network_tiers() {
    let server = MockServer::start().await;

    forbid(&server, "GET", "/robots.txt").await;
    forbid(&server, "HEAD", "/sitemap_index.xml").await;
    forbid(&server, "HEAD", "/sitemap.xml").await;

    let page = page_on(
        &server,
        r#"<link rel="sitemap" type="application/xml" href="/my-sitemap.xml">"#,
    );
    let info = inspect(&page, &reqwest::Client::new(), false).await;

    assert!(info.sitemap);
    assert!(info
        .sitemap_url
        .expect("in-page url")
        .ends_with("/my-sitemap.xml"));
}

#[tokio::test]
async fn robots_meta_flag_does_not_block_url_discovery() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap_index.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    // Tier 3 fires first (flag only), tiers 4/5 still hunt for the URL
    let page = page_on(
        &server,
        r#"<meta name="robots" content="index, follow, sitemap">"#,
    );
    let info = inspect(&page, &reqwest::Client::new(), false).await;

    assert!(info.sitemap);
    assert!(info
        .sitemap_url
        .expect("tier-5 url")
        .ends_with("/sitemap_index.xml"));
}

#[tokio::test]
async fn network_failures_are_swallowed() {
    // Nothing is listening on this origin; every tier fails quietly
    let url = Url::parse("http://127.0.0.1:1/").expect("url");
    let page = PageDocument::parse(url, "<html></html>");
    let info = inspect(&page, &reqwest::Client::new(), false).await;

    assert!(!info.sitemap);
    assert!(info.sitemap_url.is_none());
}

#[tokio::test]
async fn skip_probes_disables_network_tiers() {
    let server = MockServer::start().await;

    forbid(&server, "GET", "/robots.txt").await;
    forbid(&server, "HEAD", "/sitemap_index.xml").await;

    let page = page_on(&server, "<html></html>");
    let info = inspect(&page, &reqwest::Client::new(), true).await;

    assert!(!info.sitemap);
}
