// src/data.rs
//
// Canonical record for one catalogue item.
//
// Books are created by the extractor, held in a Vec for one run, and written
// once by the exporter. Nothing mutates them in between.

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    /// Never empty for a record that left the extractor.
    pub title: String,
    /// Non-negative; `0.0` when the price text had no parsable number.
    pub price: f64,
    /// `1..=5`, or `0` when the rating could not be determined.
    pub rating: u8,
    pub availability: String,
}

impl Book {
    pub fn new(title: impl Into<String>, price: f64, rating: u8, availability: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price,
            rating,
            availability: availability.into(),
        }
    }
}
