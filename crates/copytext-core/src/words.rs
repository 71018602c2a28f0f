//! Word counting for plain text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches http(s) links, numbers (1.000.000, 1,000,000 or 1 000 000),
/// abbreviations (D.C.), and regular or compound words (two-done).
///
/// Alternatives are tried in this order at each position.
///
/// `\w` follows Unicode word characters, which include combining marks, so
/// scripts such as Devanagari keep a word like "नमस्ते" as one token where an
/// ASCII-style or Python `\w` would split it at the vowel signs.
pub static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?:[^ ]*|([0-9]+[,. ]?)+|([\w]\.)+|[\w][\w-]*").unwrap()
});

/// Iterate over the word tokens of `text`, in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Count the word tokens of a plain text string.
///
/// A link or a grouped number counts as one word.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}
