// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Title as written to the export: `,` becomes a space and `"` becomes `'`,
/// then whitespace is collapsed (`"A, B"` -> `"A B"`).
/// Lossy on purpose, so the downstream split-on-comma reader keeps four columns.
pub fn export_title(title: &str) -> String {
    normalize_ws(&title.replace(',', " ").replace('"', "'"))
}
