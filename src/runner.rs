// src/runner.rs
use std::path::PathBuf;

use tracing::{error, info};

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher},
    file::export_books,
    progress::Progress,
    scrape::scrape_all,
};

/// Summary of what one run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub pages: u32,
    pub books: usize,
    /// Set when the export was written.
    pub written: Option<PathBuf>,
    /// Set when the export failed; the run itself still completed.
    pub export_error: Option<String>,
}

impl RunSummary {
    pub fn exported(&self) -> bool {
        self.written.is_some()
    }
}

/// Build the HTTP fetcher and run. Only client construction can fail here.
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, reqwest::Error> {
    let fetcher = HttpFetcher::new(&opts.scrape.user_agent)?;
    Ok(run_with(&fetcher, opts, progress))
}

/// Scrape every requested page, then export once.
/// Page and export failures are logged and reported, never returned.
pub fn run_with(
    fetch: &dyn Fetch,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let books = scrape_all(fetch, &opts.scrape, progress.as_deref_mut());
    info!(total = books.len(), "total books scraped");

    let out = opts.export.out_path();
    let (written, export_error) = match export_books(&books, out) {
        Ok(path) => {
            info!(path = %path.display(), "export completed");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Wrote {}", path.display()));
            }
            (Some(path), None)
        }
        Err(e) => {
            error!(error = %e, "export failed");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Export failed: {e}"));
            }
            (None, Some(e.to_string()))
        }
    };

    RunSummary {
        pages: opts.scrape.pages,
        books: books.len(),
        written,
        export_error,
    }
}
