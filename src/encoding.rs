//! Character encoding detection for byte input.
//!
//! Digests hash UTF-8, so byte input is always decoded to a `String` first.
//! The encoding is taken from a byte order mark, then from a `<meta>`
//! charset declaration near the start of the document, and defaults to
//! UTF-8. Undecodable bytes become U+FFFD instead of failing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("META_CHARSET_RE regex")
});

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label from the first `<meta>` declaring one.
fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to UTF-8.
///
/// # Examples
///
/// ```
/// use plain_content::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // decode() strips a matching BOM and replaces malformed sequences
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
