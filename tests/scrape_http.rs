// tests/scrape_http.rs
//
// Paginator against a local HTTP server.

use books_scrape::config::options::ScrapeOptions;
use books_scrape::core::HttpFetcher;
use books_scrape::core::net::Fetch;
use books_scrape::error::FetchError;
use books_scrape::scrape::{scrape_all, scrape_page};
use mockito::{Matcher, Server};

const PAGE: &str = include_str!("fixtures/catalogue_page.html");

fn item(title: &str) -> String {
    format!(
        r#"<article class="product_pod"><h3><a title="{title}">{title}</a></h3><p class="price_color">£1.00</p></article>"#
    )
}

fn opts_for(base: &str, pages: u32) -> ScrapeOptions {
    ScrapeOptions {
        pages,
        url_template: format!("{base}/catalogue/page-{{page}}.html"),
        ..ScrapeOptions::default()
    }
}

#[test]
fn pages_are_fetched_in_order_and_failures_skipped() {
    let mut server = Server::new();
    let p1 = server
        .mock("GET", "/catalogue/page-1.html")
        .match_header("user-agent", Matcher::Regex("^books_scrape/".into()))
        .with_status(200)
        .with_body(format!("{}{}", item("A"), item("B")))
        .create();
    let p2 = server.mock("GET", "/catalogue/page-2.html").with_status(500).create();
    let p3 = server
        .mock("GET", "/catalogue/page-3.html")
        .with_status(200)
        .with_body(item("C"))
        .create();

    let opts = opts_for(&server.url(), 3);
    let fetcher = HttpFetcher::new(&opts.user_agent).unwrap();
    let books = scrape_all(&fetcher, &opts, None);

    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
    p1.assert();
    p2.assert();
    p3.assert();
}

#[test]
fn non_success_status_is_a_fetch_error() {
    let mut server = Server::new();
    let _m = server.mock("GET", "/catalogue/page-1.html").with_status(404).create();

    let opts = opts_for(&server.url(), 1);
    let fetcher = HttpFetcher::new(&opts.user_agent).unwrap();
    let url = format!("{}/catalogue/page-1.html", server.url());

    match fetcher.get(&url) {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(scrape_page(&fetcher, &opts, 1).is_empty());
}

#[test]
fn real_markup_page_over_http() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/catalogue/page-1.html")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PAGE)
        .create();

    let opts = opts_for(&server.url(), 1);
    let fetcher = HttpFetcher::new(&opts.user_agent).unwrap();
    let books = scrape_page(&fetcher, &opts, 1);

    assert_eq!(books.len(), 3);
    assert_eq!(books[0].price, 51.77);
    assert_eq!(books[2].availability, "Unknown");
}

#[test]
fn unreachable_host_yields_empty_page() {
    let opts = ScrapeOptions {
        pages: 1,
        url_template: "http://127.0.0.1:9/page-{page}.html".into(),
        ..ScrapeOptions::default()
    };
    let fetcher = HttpFetcher::new(&opts.user_agent).unwrap();
    assert!(scrape_page(&fetcher, &opts, 1).is_empty());
}
