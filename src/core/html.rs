// src/core/html.rs
//! Thin helpers over `scraper` for reading one item subtree.
//! Selectors themselves live in the `specs` page module that owns them.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// First descendant of `el` matching `sel`, in document order.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Visible text of `el` with whitespace runs collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Attribute value of `el`, if present.
pub fn attr_of<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
