//! Utility functions for reading HTML attributes.

use once_cell::sync::Lazy;
use regex::Regex;
use richtext_core::Align;

static TEXT_ALIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*text-align\s*:\s*([^;]*)").expect("text-align pattern is valid")
});

/// Read the `text-align` declaration from an inline style attribute.
///
/// The effective declaration follows the cascade: the last one wins unless an
/// earlier one is `!important`. Missing, empty and unrecognised values all
/// yield `None`.
pub fn parse_text_align(style: &str) -> Option<Align> {
    let mut winner: Option<(&str, bool)> = None;
    for captures in TEXT_ALIGN.captures_iter(style) {
        let Some(raw) = captures.get(1) else { continue };
        let (value, important) = match raw.as_str().split_once('!') {
            Some((value, flag)) => (value, flag.trim().eq_ignore_ascii_case("important")),
            None => (raw.as_str(), false),
        };
        if !matches!(winner, Some((_, true))) || important {
            winner = Some((value.trim(), important));
        }
    }

    let (value, _) = winner?;
    if value.is_empty() {
        return None;
    }
    let align = Align::parse(value);
    if align.is_none() {
        log::debug!("ignoring unsupported text-align value `{}`", value);
    }
    align
}
