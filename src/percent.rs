//! Percent-decoding of tag attribute values.
//!
//! `title` and `href` attributes arrive URI-component encoded. Decoding
//! follows component semantics: every `%XX` escape is decoded, reserved
//! characters included. A value that cannot be decoded is kept as-is.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::warn;

use crate::error::{Error, Result};

/// Characters left untouched by [`encode_component`]: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decode a percent-encoded value, falling back to the input on failure.
///
/// Never fails. A malformed escape or a non-UTF-8 result logs a warning and
/// returns `encoded` unchanged, so decoding a failing input repeatedly always
/// yields the same string.
///
/// # Examples
///
/// ```
/// use rs_zsxq_render::percent::decode;
///
/// assert_eq!(decode("%23go"), "#go");
/// assert_eq!(decode("100%"), "100%");
/// ```
#[must_use]
pub fn decode(encoded: &str) -> String {
    match try_decode(encoded) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(input = encoded, error = %err, "percent decoding failed, keeping raw value");
            encoded.to_string()
        }
    }
}

/// Decode a percent-encoded value, reporting why decoding failed.
///
/// # Errors
///
/// - [`Error::MalformedEscape`] when a `%` is not followed by two hex digits
/// - [`Error::InvalidUtf8`] when the decoded bytes are not UTF-8
pub fn try_decode(encoded: &str) -> Result<String> {
    if let Some(position) = find_malformed_escape(encoded) {
        return Err(Error::MalformedEscape {
            input: encoded.to_string(),
            position,
        });
    }

    percent_decode_str(encoded)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| Error::InvalidUtf8(encoded.to_string()))
}

/// Percent-encode a value for use as a single URL path segment.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, non-ASCII
/// characters as their UTF-8 bytes in uppercase hex.
///
/// # Examples
///
/// ```
/// use rs_zsxq_render::percent::encode_component;
///
/// assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
/// assert_eq!(encode_component("读书"), "%E8%AF%BB%E4%B9%A6");
/// ```
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Byte offset of the first `%` that does not start a valid `%XX` escape.
fn find_malformed_escape(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .map(|(i, _)| i)
        .find(|&i| {
            !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
        })
}
