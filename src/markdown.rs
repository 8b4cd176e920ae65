//! Post-processing of completion text.
//!
//! Models like to answer in markdown; the page renders plain text, so
//! emphasis markers are removed before the text goes back to the browser.

// Allow unwrap on the static pattern - it is a literal that always compiles
#![allow(clippy::unwrap_used)]

use once_cell::sync::Lazy;
use regex::Regex;

// Runs of one or two emphasis characters. Longer runs are consumed in pairs.
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_]{1,2}").unwrap());

/// Remove every `*` / `_` emphasis run from `text`.
///
/// This is deliberately naive: it does not parse markdown, so literal
/// asterisks and underscores in the content (`snake_case`, `2 * 3`) are
/// removed as well.
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS.replace_all(text, "").into_owned()
}
