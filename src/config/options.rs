// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Number of catalogue pages to walk, starting at page 1.
    pub pages: u32,
    /// Page URL with a `{page}` placeholder.
    pub url_template: String,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES,
            url_template: URL_TEMPLATE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ScrapeOptions {
    /// Page numbers to scrape, in order. Empty when `pages == 0`.
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.pages
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_FILE) }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Take a user-supplied path verbatim. The parent directory must already exist.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_path = PathBuf::from(s);
        }
    }

    /// Take an already-parsed path as-is: no trimming, no UTF-8 round trip.
    pub fn set_path_buf(&mut self, path: PathBuf) {
        self.out_path = path;
    }
}
