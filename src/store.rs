// src/store.rs
//
// Loading an export back, as the dashboard consumer reads it.

use std::{fs, io, path::Path};

use tracing::{info, warn};

use crate::csv::parse_line;
use crate::data::Book;
use crate::error::StoreError;

/// Read books from a previously written export.
///
/// A missing file is not an error: it yields no books. The first line is
/// treated as the header and skipped; lines that do not parse are dropped.
pub fn load_books(path: &Path) -> Result<Vec<Book>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "CSV file not found");
            return Ok(Vec::new());
        }
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    };

    let books: Vec<Book> = text
        .lines()
        .skip(1)
        .filter_map(parse_line)
        .collect();

    info!(count = books.len(), path = %path.display(), "loaded books from CSV");
    Ok(books)
}
