//! Text normalization.
//!
//! The rewriter and the block flattener treat normalization as an opaque
//! `&str -> String` function behind [`TextNormalizer`]. The shipped
//! [`DefaultNormalizer`] applies, in order:
//!
//! 1. Unicode NFKC normalization
//! 2. Removal of control, format and private-use characters, except
//!    `\t`, `\n`, `\r` and form feed
//! 3. Collapsing every run of Unicode whitespace to one space and trimming
//!    both ends

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Matches runs of Unicode whitespace.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Control characters that survive stripping (they are whitespace and get
/// collapsed afterwards).
const RETAINED_CONTROLS: [char; 4] = ['\t', '\n', '\r', '\u{0c}'];

/// String-to-string text canonicalization.
pub trait TextNormalizer {
    fn normalize(&self, text: &str) -> String;
}

impl<F> TextNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}

/// NFKC + control stripping + whitespace collapsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer;

impl TextNormalizer for DefaultNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalise_text(text)
    }
}

/// Normalize text with the default rules.
///
/// # Examples
///
/// ```
/// use plain_content::normalize::normalise_text;
///
/// assert_eq!(normalise_text("  Hello \n\t world  "), "Hello world");
/// assert_eq!(normalise_text("zero\u{200B}width"), "zerowidth");
/// ```
#[must_use]
pub fn normalise_text(text: &str) -> String {
    let unicode: String = text.nfkc().collect();
    let stripped = strip_control_characters(&unicode);
    normalise_whitespace(&stripped)
}

/// Collapse whitespace runs to a single space and trim.
#[must_use]
pub fn normalise_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Remove characters that never render and may confuse downstream parsing.
#[must_use]
pub fn strip_control_characters(text: &str) -> String {
    text.chars()
        .filter(|&ch| RETAINED_CONTROLS.contains(&ch) || !is_control_like(ch))
        .collect()
}

/// Control (Cc), format (Cf) and private-use (Co) characters.
///
/// Surrogates (Cs) cannot occur in a Rust `str`.
fn is_control_like(ch: char) -> bool {
    ch.is_control() || is_format(ch) || is_private_use(ch)
}

fn is_format(ch: char) -> bool {
    matches!(
        ch,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

fn is_private_use(ch: char) -> bool {
    matches!(
        ch,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}
