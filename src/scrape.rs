// src/scrape.rs
//
// Page fetcher and paginator. Strictly sequential: one request in flight,
// pages collected in order, a failed page contributes zero books.

use tracing::{debug, error, info, warn};

use crate::{
    config::{consts::PAGE_PLACEHOLDER, options::ScrapeOptions},
    core::net::Fetch,
    data::Book,
    error::FetchError,
    progress::Progress,
    specs::books,
};

/// Substitute the page number into the URL template.
pub fn page_url(template: &str, page: u32) -> String {
    template.replace(PAGE_PLACEHOLDER, &page.to_string())
}

/// Fetch and extract one page, surfacing fetch failures.
pub fn try_scrape_page(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    page: u32,
) -> Result<Vec<Book>, FetchError> {
    let url = page_url(&opts.url_template, page);
    debug!(page, %url, "scraping page");

    let html = fetch.get(&url)?;
    let found = books::parse_page(&html);

    if found.is_empty() {
        warn!(page, "no books found on this page");
    } else {
        debug!(page, count = found.len(), "extracted books");
    }
    Ok(found)
}

/// Fetch and extract one page. Never fails: errors are logged and the page
/// yields no books.
pub fn scrape_page(fetch: &dyn Fetch, opts: &ScrapeOptions, page: u32) -> Vec<Book> {
    try_scrape_page(fetch, opts, page).unwrap_or_else(|e| {
        error!(page, error = %e, "failed to scrape page");
        Vec::new()
    })
}

/// Scrape pages `1..=opts.pages` one after another and concatenate the
/// results in page order, then document order within each page.
pub fn scrape_all(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Book> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.pages as usize);
    }

    let mut all = Vec::new();
    for page in opts.page_numbers() {
        match try_scrape_page(fetch, opts, page) {
            Ok(mut found) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(page, found.len());
                }
                all.append(&mut found);
            }
            Err(e) => {
                error!(page, error = %e, "failed to scrape page");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!(total = all.len(), "scrape finished");
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, price: &str) -> String {
        format!(
            r#"<article class="product_pod"><h3><a title="{title}">{title}</a></h3><p class="price_color">{price}</p></article>"#
        )
    }

    fn opts(pages: u32) -> ScrapeOptions {
        ScrapeOptions {
            pages,
            url_template: "http://test/page-{page}.html".into(),
            ..ScrapeOptions::default()
        }
    }

    /// Page 1: A, B. Page 2: fetch error. Page 3: C. Anything else: no items.
    fn fake(url: &str) -> Result<String, FetchError> {
        match url {
            "http://test/page-1.html" => Ok(format!("{}{}", item("A", "$1.00"), item("B", "$2.00"))),
            "http://test/page-2.html" => Err(FetchError::Other("boom".into())),
            "http://test/page-3.html" => Ok(item("C", "$3.00")),
            _ => Ok("<html><body>empty</body></html>".into()),
        }
    }

    #[derive(Default)]
    struct Recorder {
        begun: Option<usize>,
        done: Vec<(u32, usize)>,
        failed: Vec<u32>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) {
            self.begun = Some(total);
        }

        fn page_done(&mut self, page: u32, books: usize) {
            self.done.push((page, books));
        }

        fn page_failed(&mut self, page: u32, _reason: &str) {
            self.failed.push(page);
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn url_template_substitution() {
        assert_eq!(
            page_url("https://books.toscrape.com/catalogue/page-{page}.html", 7),
            "https://books.toscrape.com/catalogue/page-7.html"
        );
    }

    #[test]
    fn pages_concatenate_in_order() {
        let books = scrape_all(&fake, &opts(1), None);
        assert_eq!(titles(&books), ["A", "B"]);

        let books = scrape_all(&fake, &opts(3), None);
        assert_eq!(titles(&books), ["A", "B", "C"]);
    }

    #[test]
    fn failed_page_does_not_stop_the_run() {
        let mut rec = Recorder::default();
        let books = scrape_all(&fake, &opts(4), Some(&mut rec));
        assert_eq!(titles(&books), ["A", "B", "C"]);
        assert_eq!(rec.begun, Some(4));
        assert_eq!(rec.done, vec![(1, 2), (3, 1), (4, 0)]);
        assert_eq!(rec.failed, vec![2]);
        assert!(rec.finished);
    }

    #[test]
    fn scrape_page_swallows_errors_and_empty_pages() {
        assert!(scrape_page(&fake, &opts(1), 2).is_empty());
        assert!(scrape_page(&fake, &opts(1), 9).is_empty());
        assert!(try_scrape_page(&fake, &opts(1), 2).is_err());
    }

    #[test]
    fn zero_pages_fetches_nothing() {
        let never = |_: &str| -> Result<String, FetchError> { panic!("must not fetch") };
        assert!(scrape_all(&never, &opts(0), None).is_empty());
    }
}
