// src/config/consts.rs

// Net config
pub const URL_TEMPLATE: &str = "https://books.toscrape.com/catalogue/page-{page}.html";
pub const PAGE_PLACEHOLDER: &str = "{page}";
pub const USER_AGENT: &str = concat!("books_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const DEFAULT_PAGES: u32 = 1;
pub const MAX_SUGGESTED_PAGES: u32 = 50; // shown in the prompt, not enforced

// Export
pub const DEFAULT_OUT_FILE: &str = "books_output.csv";
pub const CSV_HEADER: [&str; 4] = ["Title", "Price", "Rating", "Availability"];
pub const UNKNOWN_AVAILABILITY: &str = "Unknown";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
