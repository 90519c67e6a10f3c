//! Plain-text extraction from rendered HTML.

use crate::patterns::HTML_TAG;

/// Remove every HTML element boundary and trim the result.
///
/// Attribute values (links, tag ids) are discarded along with the tags.
/// Unpaired `<` or `>` characters left over after tag removal are dropped
/// as well, so the result never contains angle brackets.
///
/// # Examples
///
/// ```
/// use rs_zsxq_render::text::strip_tags;
///
/// assert_eq!(strip_tags("<br><span class=\"x\">@bob</span> "), "@bob");
/// assert_eq!(strip_tags("1 < 2"), "1  2");
/// ```
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let stripped = HTML_TAG.replace_all(html, "");
    let text: String = stripped.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    text.trim().to_string()
}
