// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the data
//! lives in the HTML* for one kind of page and *how to extract it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-fetched document (no network).
//! - **The selector contract** for the page: container node, nested title /
//!   price / rating / availability nodes.
//! - **Field parsing** (price text to number, rating class to 1..=5).
//!
//! ## What does **not** live here
//! - Fetching and pagination (`scrape`).
//! - Export formatting (`csv`, `file`).
//!
//! ## Conventions & invariants
//! - A malformed item is dropped with a warning; it never fails the page.
//! - Items come back in document order.
//! - Specs are testable **offline** against inline HTML fixtures.
//!
//! ## Typical call chain
//! ```text
//! runner -> scrape::scrape_all -> scrape::scrape_page -> specs::books::parse_page
//! ```
pub mod books;
