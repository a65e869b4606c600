//! Key and query normalization.
//!
//! Stored keys and incoming query text are always pushed through the same
//! [`normalize_key`] before comparison, so `"Halls_of_Atonement"`,
//! `"  halls of atonement "` and `"HALLS-OF-ATONEMENT"` all land on the same
//! index slot.
//!
//! Rules, in order:
//!
//! - Unicode NFKD decomposition, combining marks dropped (so `Azj-Kahet`
//!   matches a query typed without the diacritic-carrying variant)
//! - lowercased
//! - `_`, `-` and whitespace fold to a single space separator
//! - leading/trailing separators trimmed

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a raw key or query for indexing and comparison.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut prev_was_space = true;

    for ch in raw.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }

        for lower in ch.to_lowercase() {
            if lower.is_whitespace() || matches!(lower, '-' | '_') {
                push_space(&mut normalized, &mut prev_was_space);
            } else {
                normalized.push(lower);
                prev_was_space = false;
            }
        }
    }

    while normalized.ends_with(' ') {
        normalized.pop();
    }
    normalized
}

fn push_space(normalized: &mut String, prev_was_space: &mut bool) {
    if !*prev_was_space && !normalized.is_empty() {
        normalized.push(' ');
        *prev_was_space = true;
    }
}

/// Derive a presentable name from a raw key: separators become spaces and
/// each word is capitalized. Used when a source entry has no explicit name.
#[must_use]
pub fn display_from_key(raw: &str) -> String {
    let mut display = String::with_capacity(raw.len());
    for (i, word) in normalize_key(raw).split(' ').enumerate() {
        if i > 0 {
            display.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            display.extend(first.to_uppercase());
            display.push_str(chars.as_str());
        }
    }
    display
}
