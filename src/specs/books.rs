// src/specs/books.rs
//
// Catalogue listing page: one <article class="product_pod"> per book.
//
//   <article class="product_pod">
//     <p class="star-rating Three"></p>
//     <h3><a href="..." title="Full Title">Full Ti...</a></h3>
//     <div class="product_price">
//       <p class="price_color">£51.77</p>
//       <p class="instock availability"><i class="icon-ok"></i> In stock</p>
//     </div>
//   </article>
//
// Class predicates are exact attribute matches (not class-token matches),
// except the rating node, which only has to contain "star-rating".

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::consts::UNKNOWN_AVAILABILITY;
use crate::core::html::{attr_of, first, text_of};
use crate::data::Book;

fn sel(css: &str) -> Selector {
    // Only ever called with the literals below.
    Selector::parse(css).expect("static selector must parse")
}

static ITEM: LazyLock<Selector> = LazyLock::new(|| sel(r#"article[class="product_pod"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("h3 > a"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| sel(r#"p[class="price_color"]"#));
static RATING: LazyLock<Selector> = LazyLock::new(|| sel(r#"p[class*="star-rating"]"#));
static AVAILABILITY: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"p[class="instock availability"]"#));

static PRICE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]+").expect("static regex must compile"));

const RATING_TOKENS: [(&str, u8); 5] = [
    ("One", 1),
    ("Two", 2),
    ("Three", 3),
    ("Four", 4),
    ("Five", 5),
];

/// Parse a full listing page into books, in document order.
/// Items missing a title or price are dropped with a warning.
pub fn parse_page(html: &str) -> Vec<Book> {
    let doc = Html::parse_document(html);
    let mut books = Vec::new();
    let mut items = 0usize;

    for item in doc.select(&ITEM) {
        items += 1;
        match extract(item) {
            Some(book) => books.push(book),
            None => warn!(item = items, "skipping item without title or price"),
        }
    }
    debug!(items, kept = books.len(), "parsed listing page");
    books
}

/// Pull one book out of a single item container.
///
/// Returns `None` when the title link or the price node is absent, or the
/// title resolves to an empty string. Rating and availability degrade to
/// `0` and `"Unknown"` instead.
pub fn extract(item: ElementRef<'_>) -> Option<Book> {
    let title_el = first(item, &TITLE)?;
    let price_el = first(item, &PRICE)?;

    // The link text is truncated on the site; the attribute carries the full title.
    let title = match attr_of(title_el, "title").map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => text_of(title_el),
    };
    if title.is_empty() {
        debug!("title link present but empty");
        return None;
    }

    let price = parse_price(&text_of(price_el));
    let rating = first(item, &RATING)
        .and_then(|el| attr_of(el, "class"))
        .map(parse_rating)
        .unwrap_or(0);
    let availability = first(item, &AVAILABILITY)
        .map(text_of)
        .unwrap_or_else(|| UNKNOWN_AVAILABILITY.to_string());

    Some(Book { title, price, rating, availability })
}

/// First run of digits and dots, parsed as a number. Anything else,
/// including a run too long to be finite, is `0.0`.
pub fn parse_price(text: &str) -> f64 {
    PRICE_RUN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

/// First of `One`..`Five` contained in the class text, as 1..=5. None found is `0`.
pub fn parse_rating(class_text: &str) -> u8 {
    RATING_TOKENS
        .iter()
        .find(|(token, _)| class_text.contains(token))
        .map(|&(_, n)| n)
        .unwrap_or(0)
}
