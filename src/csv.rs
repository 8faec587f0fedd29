// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::CSV_HEADER;
use crate::core::sanitize::export_title;
use crate::data::Book;

/* ---------------- Writing ---------------- */

/// Header line, without terminator.
pub fn header_line() -> String {
    CSV_HEADER.join(",")
}

/// One data line, without terminator: `"<title>",<price>,<rating>,"<availability>"`.
///
/// Only the title is cleaned (see `export_title`); availability is quoted as-is.
/// The format is meant for a reader that splits on `,` and trims `"`.
pub fn book_line(b: &Book) -> String {
    format!(
        "\"{}\",{:.2},{},\"{}\"",
        export_title(&b.title),
        b.price,
        b.rating,
        b.availability
    )
}

/// Write header plus one line per book, in order, to any writer.
pub fn write_books<W: Write>(mut w: W, books: &[Book]) -> io::Result<()> {
    writeln!(w, "{}", header_line())?;
    for b in books {
        writeln!(w, "{}", book_line(b))?;
    }
    w.flush()
}

/// Full export content as a string.
pub fn to_export_string(books: &[Book]) -> String {
    let mut s = header_line();
    s.push('\n');
    for b in books {
        s.push_str(&book_line(b));
        s.push('\n');
    }
    s
}

/* ---------------- Reading (naive consumer) ---------------- */

/// Read one data line the way the dashboard consumer does: split on `,`,
/// trim surrounding `"` from text fields, drop `$` from the price.
/// Lines with fewer than four fields or unparsable numbers give `None`.
pub fn parse_line(line: &str) -> Option<Book> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 4 {
        return None;
    }
    let title = parts[0].trim_matches('"');
    let price = parts[1].trim_matches('"').replace('$', "").parse::<f64>().ok()?;
    let rating = parts[2].parse::<u8>().ok()?;
    let availability = parts[3].trim_matches('"');

    Some(Book::new(title, price, rating, availability))
}
