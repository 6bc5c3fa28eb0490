//! Text-to-slug encoding.
//!
//! Two branches:
//! - URL-shaped input (`http://` / `https://`, any case) keeps its protocol
//!   and is only cleaned of characters that cannot appear in a URL path.
//! - Everything else is transliterated, stripped of diacritics and symbols,
//!   and has its word breaks collapsed into the chosen separator. A leading
//!   or trailing `/` in the cleaned text survives as a path marker.

use crate::table::transliterate;
use regex::Regex;
use slugsync_types::{Separator, SlugOptions};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("static URL pattern"));

/// Encodes `text` into a slug under `options`.
///
/// Total and pure: empty input yields an empty slug and no input can fail.
/// Case folding happens before URL splitting, so the protocol token follows
/// the `lowercase` option as well.
///
/// Symbol stripping keeps the active separator: with `_`, an input
/// underscore survives as a word break (`"foo bar_baz"` gives
/// `"foo_bar_baz"`, not `"foo_barbaz"`). This keeps every slug a fixed
/// point of `encode` under its own options.
#[must_use]
pub fn encode(text: &str, options: SlugOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let is_url = URL_PREFIX.is_match(text);
    let folded = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if is_url {
        encode_url(folded)
    } else {
        encode_text(&folded, options.separator)
    }
}

/// [`encode`] for values that may be absent; absent encodes to `""`.
#[must_use]
pub fn encode_optional(text: Option<&str>, options: SlugOptions) -> String {
    text.map(|t| encode(t, options)).unwrap_or_default()
}

/// Whether `text` takes the URL branch of [`encode`].
#[must_use]
pub fn is_url(text: &str) -> bool {
    URL_PREFIX.is_match(text)
}

fn encode_url(folded: String) -> String {
    match folded.split_once("://") {
        Some((protocol, rest)) if !protocol.is_empty() && !rest.is_empty() => {
            let cleaned: String = strip_marks(rest)
                .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '-' | '/' | '.' | ':'))
                .collect();
            format!("{protocol}://{}", cleaned.trim())
        }
        _ => folded,
    }
}

fn encode_text(folded: &str, separator: Separator) -> String {
    let sep = separator.as_char();
    let transliterated = transliterate(folded);

    // The active separator is kept so an existing slug re-encodes to itself.
    let cleaned: String = strip_marks(&transliterated)
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '-' | '/' | ' ') || c == sep)
        .collect();
    let cleaned = cleaned.trim();

    let leading_slash = cleaned.starts_with('/');
    let trailing_slash = cleaned.ends_with('/');

    let collapsed = collapse_breaks(cleaned, sep);
    let trimmed = collapsed.strip_prefix(sep).unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix(sep).unwrap_or(trimmed);

    let mut slug = String::with_capacity(trimmed.len() + 2);
    if leading_slash && !trimmed.starts_with('/') {
        slug.push('/');
    }
    slug.push_str(trimmed);
    if trailing_slash && !slug.ends_with('/') {
        slug.push('/');
    }
    slug
}

/// Canonical decomposition with combining diacritics (U+0300..=U+036F) removed.
fn strip_marks(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
}

/// Replaces every run of spaces, hyphens, slashes and separators with a
/// single separator.
fn collapse_breaks(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c.is_whitespace() || c == '-' || c == '/' || c == sep {
            if !in_break {
                out.push(sep);
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}
