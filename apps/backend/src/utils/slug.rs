//! URL-safe identifiers derived from free-form names.

use unicode_normalization::UnicodeNormalization;

/// Symbols spelled out before folding (`AT&T` -> `atandt`).
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('$', "dollar"),
    ('%', "percent"),
    ('<', "less"),
    ('>', "greater"),
    ('|', "or"),
    ('\u{a2}', "cent"),
    ('\u{a3}', "pound"),
    ('\u{a5}', "yen"),
    ('\u{20ac}', "euro"),
];

fn spell_symbols(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match SYMBOL_WORDS.iter().find(|(sym, _)| *sym == ch) {
            Some((_, word)) => out.push_str(word),
            None => out.push(ch),
        }
    }
    out
}

/// Lowercase, ASCII-fold and hyphenate `input`.
///
/// A few symbols are spelled out (`&` -> `and`), accented letters decompose
/// to their base letter (`Café` -> `cafe`), and every other character outside
/// `[A-Za-z0-9]`, whitespace and `-` is deleted, so punctuation inside a word
/// joins its halves (`J.P.` -> `jp`). Runs of whitespace and hyphens become a
/// single `-`; leading or trailing hyphens are dropped. Returns an empty
/// string when nothing usable remains.
///
/// ```
/// use biztime::utils::slug::slugify;
///
/// assert_eq!(slugify("New Company"), "new-company");
/// assert_eq!(slugify("  Ünïcode & Co. "), "unicode-and-co");
/// ```
pub fn slugify(input: &str) -> String {
    let spelled = spell_symbols(input);
    let mut out = String::with_capacity(spelled.len());
    let mut pending_dash = false;

    for ch in spelled.nfkd() {
        if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        } else if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        }
        // anything else (punctuation, combining marks, unmapped scripts) is dropped
    }
    out
}
