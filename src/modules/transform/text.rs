//! String and list sanitizers.
//!
//! Every function here is total: any JSON value in, a defined value out.
//! `None` is the in-pipeline form of the "Not Available" sentinel.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

use crate::domain::sentinel::NOT_AVAILABLE;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static TAG_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Scraped placeholders that mean "no value"
const NULL_LIKE: [&str; 6] = ["", "null", "None", "-", "--", NOT_AVAILABLE];

/// Collapse every whitespace run to one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Remove `<...>` spans. Entities are left encoded.
pub fn strip_html(text: &str) -> Cow<'_, str> {
    TAG_SPAN.replace_all(text, "")
}

/// Tag-stripped, whitespace-normalized text; `None` for null-like results.
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = normalize_whitespace(&strip_html(text));
    if NULL_LIKE.contains(&cleaned.as_str()) {
        None
    } else {
        Some(cleaned)
    }
}

/// [`clean_text`] for arbitrary JSON; anything but a string is absent.
pub fn clean_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => clean_text(text),
        _ => None,
    }
}

/// Address variant: drops every `#` first and keeps placeholder-looking
/// text. Only an empty result is absent.
pub fn clean_address_text(text: &str) -> Option<String> {
    let without_hashes = text.replace('#', "");
    let cleaned = normalize_whitespace(&strip_html(&without_hashes));
    if cleaned.is_empty() || cleaned == NOT_AVAILABLE {
        None
    } else {
        Some(cleaned)
    }
}

pub fn clean_address(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => clean_address_text(text),
        _ => None,
    }
}

/// Clean each item, dropping the ones that end up empty. Order is kept.
pub fn clean_items<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .map(|item| normalize_whitespace(&strip_html(item)))
        .filter(|item| !item.is_empty())
        .collect()
}

/// [`clean_items`] for arbitrary JSON. Non-arrays give an empty list and
/// non-string elements are dropped.
pub fn clean_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => clean_items(items.iter().filter_map(Value::as_str)),
        _ => Vec::new(),
    }
}

/// Move prose that leaked into the education field over to the biography.
///
/// Heuristic: only when no biography was extracted and education has at least
/// two periods, split at the first period. Head becomes education, tail
/// becomes biography. Text is redistributed, never invented.
pub fn separate_education_and_biography(
    education: Option<String>,
    biography: Option<String>,
) -> (Option<String>, Option<String>) {
    let Some(education) = education else {
        return (None, biography);
    };

    if biography.is_some() {
        return (Some(education), biography);
    }

    if education.matches('.').count() >= 2 {
        if let Some((head, tail)) = education.split_once('.') {
            let head = normalize_whitespace(head);
            let tail = normalize_whitespace(tail);
            return (
                Some(head).filter(|s| !s.is_empty()),
                Some(tail).filter(|s| !s.is_empty()),
            );
        }
    }

    (Some(education), None)
}
