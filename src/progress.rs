// src/progress.rs
/// Lightweight progress reporting for a multi-page scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages that will be attempted.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page finished; `books` may be zero.
    fn page_done(&mut self, _page: u32, _books: usize) {}

    /// One page could not be fetched. The run continues.
    fn page_failed(&mut self, _page: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink, for callers that want none.
pub struct NullProgress;

impl Progress for NullProgress {}
