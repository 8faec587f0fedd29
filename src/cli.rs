// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{DEFAULT_PAGES, MAX_SUGGESTED_PAGES};
use crate::config::options::AppOptions;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Scrape a paginated book catalogue into CSV.
#[derive(Parser, Debug, Default)]
#[command(name = "books_scrape", version, about)]
pub struct Args {
    /// Pages to scrape, starting at 1. Asked interactively when omitted.
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Output CSV path (overwritten; its directory must exist).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Page URL with a `{page}` placeholder.
    #[arg(long)]
    pub url_template: Option<String>,

    /// Debug-level logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Fold flags over the defaults. `pages` is already resolved.
    pub fn to_options(&self, pages: u32) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.pages = pages;
        if let Some(t) = &self.url_template {
            opts.scrape.url_template = t.clone();
        }
        if let Some(o) = &self.out {
            opts.export.set_path_buf(o.clone());
        }
        opts
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let _guard = crate::log::init(args.verbose).wrap_err("could not set up logging")?;

    println!("[INFO] books_scrape starting...\n");

    let pages = match args.pages {
        Some(n) => n,
        None => {
            let stdin = io::stdin();
            prompt_pages(stdin.lock(), io::stdout())?
        }
    };

    let opts = args.to_options(pages);
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, Some(&mut progress)).wrap_err("scraping failed")?;

    report(&summary);
    Ok(())
}

/// Ask for the page count on `out`, read one line from `input`.
pub fn prompt_pages<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<u32> {
    writeln!(out, "How many pages do you want to scrape? (1-{MAX_SUGGESTED_PAGES}): ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_page_count(&line))
}

/// Integer input as typed; anything that is not an integer means the default.
/// Negative counts scrape nothing. The suggested range is not enforced.
pub fn parse_page_count(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) => u32::try_from(n.max(0)).unwrap_or(u32::MAX),
        Err(_) => DEFAULT_PAGES,
    }
}

fn report(summary: &RunSummary) {
    println!("\n[SUCCESS] Total books scraped: {}", summary.books);
    match (&summary.written, &summary.export_error) {
        (Some(path), _) => println!("[INFO] Output file: {}", path.display()),
        (None, Some(e)) => println!("[ERROR] Export failed: {e}"),
        (None, None) => {}
    }
    println!("[INFO] Debug log: {}", crate::log::log_path().display());
}

/// Prints one status line per page.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("[INFO] {msg}");
    }
    fn page_done(&mut self, page: u32, books: usize) {
        println!("[INFO] Page {page}/{}: {books} books", self.total);
    }
    fn page_failed(&mut self, page: u32, reason: &str) {
        println!("[ERROR] Page {page}/{}: {reason}", self.total);
    }
}
