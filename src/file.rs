// src/file.rs

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::csv::write_books;
use crate::data::Book;
use crate::error::ExportError;

/// Write the CSV export to `path`, truncating any existing file.
/// The parent directory must already exist; it is not created.
/// Returns the path written to.
pub fn export_books(books: &[Book], path: &Path) -> Result<PathBuf, ExportError> {
    let io_err = |source| ExportError::Io { path: path.to_path_buf(), source };

    info!(count = books.len(), path = %path.display(), "exporting books");
    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    write_books(BufWriter::new(file), books).map_err(io_err)?;

    Ok(path.to_path_buf())
}
