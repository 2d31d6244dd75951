//! UTF-8 decoding for plain text and Markdown input.

use std::borrow::Cow;

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// Valid input is returned verbatim: no trimming, no newline normalisation.
///
/// ```rust
/// use doctext::extraction::text::decode_utf8;
///
/// assert_eq!(decode_utf8(b"line one\r\nline two\n"), "line one\r\nline two\n");
/// ```
pub fn decode_utf8(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}
