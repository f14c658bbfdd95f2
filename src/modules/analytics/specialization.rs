//! Specialization blob → topical tokens.
//!
//! Scraped specialization sections mix short topic labels with narrative
//! sentences ("Please click here...", "She received..."). Only the labels
//! are kept.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_TOKEN_CHARS: usize = 120;
const NARRATIVE_PREFIXES: [&str; 3] = ["meet ", "please click", "know more"];

static NARRATIVE_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(received|currently|serving|experience|worked)\b")
        .expect("narrative verb pattern is valid")
});
static TRAILING_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.\s]+$").expect("trailing noise pattern is valid"));

/// True if `token` looks like a topic label rather than prose.
pub fn is_valid_specialization(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() || token.chars().count() > MAX_TOKEN_CHARS {
        return false;
    }

    let lower = token.to_lowercase();
    if NARRATIVE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return false;
    }
    !NARRATIVE_VERB.is_match(&lower)
}

/// Split on commas, strip trailing periods/whitespace, keep the valid parts.
///
/// `None` (no specialization) and all-noise input both give an empty list.
pub fn tokenize_specialization(specialization: Option<&str>) -> Vec<String> {
    let Some(text) = specialization else {
        return Vec::new();
    };

    text.split(',')
        .map(|part| TRAILING_NOISE.replace(part.trim(), "").into_owned())
        .filter(|part| is_valid_specialization(part))
        .collect()
}
