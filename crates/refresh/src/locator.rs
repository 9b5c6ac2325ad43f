//! Lexical location of marked elements.
//!
//! An element is addressable when its open tag carries both a
//! `data-ticker` and a `data-field` attribute as quoted literals, in either
//! relative order, possibly with other attributes between them. Matching is
//! purely lexical and never crosses a tag boundary: `[^>]*` keeps the
//! attribute match inside one open tag and `[^<]*` keeps the text match
//! inside one flat text run. That is sufficient here because the document
//! guarantees marked elements hold a single flat text run, and it is what
//! keeps every byte outside that run untouched.

use regex::Regex;

/// Both-orders pattern for an open tag carrying the marker pair.
fn open_tag_pattern(ticker: &str, field: &str) -> String {
    let t = regex::escape(ticker);
    let f = regex::escape(field);
    format!(
        r#"<[^>]*data-ticker="{t}"[^>]*data-field="{f}"[^>]*>|<[^>]*data-field="{f}"[^>]*data-ticker="{t}"[^>]*>"#
    )
}

/// Matches the full open tag of an element marked (ticker, field).
pub fn marked_open_tag(ticker: &str, field: &str) -> Regex {
    let pattern = format!("(?:{})", open_tag_pattern(ticker, field));
    Regex::new(&pattern).expect("marker tag pattern is valid")
}

/// Matches a marked element's open tag plus its editable text run.
///
/// Capture 1 is the open tag through `>`, capture 2 the text run, capture
/// 3 the `<` that ends it. Zero matches means the field is simply not
/// present in this document for that ticker.
pub fn marked_text_run(ticker: &str, field: &str) -> Regex {
    let pattern = format!(r#"((?:{}))([^<]*)(<)"#, open_tag_pattern(ticker, field));
    Regex::new(&pattern).expect("marker text pattern is valid")
}

/// Matches a text run by field marker alone, for the ticker-independent
/// stamp fields.
pub fn field_text_run(field: &str) -> Regex {
    let f = regex::escape(field);
    let pattern = format!(r#"(<[^>]*data-field="{f}"[^>]*>)([^<]*)(<)"#);
    Regex::new(&pattern).expect("field text pattern is valid")
}
