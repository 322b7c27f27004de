//! Single-pass placeholder substitution.

use crate::placeholder::{Placeholder, PlaceholderMap};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

/// Alternation of the vocabulary tokens, longest first.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let mut tokens: Vec<_> = Placeholder::iter().map(Placeholder::token).collect();
    tokens.sort_by_key(|token| std::cmp::Reverse(token.len()));
    let alternation = tokens.into_iter().map(regex::escape).collect::<Vec<_>>().join("|");
    Regex::new(&alternation).expect("placeholder tokens form a valid pattern")
});

/// Replaces every vocabulary token in `template` with its value from `placeholders`.
///
/// Only vocabulary tokens are matched, so surrounding `__`-delimited text (e.g. PHP's
/// `__DIR__`) never hides a token next to it. Tokens without a value are left as they are.
/// Substituted values are never re-scanned, so a code sample that happens to contain
/// `__Name__` is embedded verbatim.
#[must_use]
pub fn render(template: &str, placeholders: &PlaceholderMap) -> String {
    TOKEN_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let token = &caps[0];
            Placeholder::from_str(token)
                .ok()
                .and_then(|placeholder| placeholders.get(placeholder))
                .unwrap_or(token)
                .to_owned()
        })
        .into_owned()
}

/// Lists vocabulary tokens still present in `text`, in order of appearance.
#[must_use]
pub fn unresolved_tokens(text: &str) -> Vec<Placeholder> {
    TOKEN_REGEX.find_iter(text).filter_map(|m| Placeholder::from_str(m.as_str()).ok()).collect()
}
