//! Search term highlighting.
//!
//! Highlighting runs over an HTML string, not over its text nodes. A term
//! that occurs inside an attribute value or a tag name is wrapped too, which
//! breaks the surrounding markup. Callers that render user searches should
//! be aware of this; it is kept for output compatibility with the web client.

use regex::{Captures, Regex, RegexBuilder};
use tracing::warn;

use crate::error::{Error, Result};
use crate::patterns::HIGHLIGHT_STYLE;

/// Build the case-insensitive literal pattern for `term`.
pub fn term_pattern(term: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::InvalidPattern(e.to_string()))
}

/// Wrap every case-insensitive occurrence of `term` in `html` with a
/// highlight `<mark>`.
///
/// Returns `html` unchanged when either argument is empty, or when the term
/// cannot be compiled into a pattern (logged as a warning).
///
/// # Examples
///
/// ```
/// use rs_zsxq_render::highlight::highlight_term;
///
/// let html = highlight_term("Rust and rust", "RUST");
/// assert_eq!(html.matches("<mark ").count(), 2);
/// ```
#[must_use]
pub fn highlight_term(html: &str, term: &str) -> String {
    if html.is_empty() || term.is_empty() {
        return html.to_string();
    }

    match try_highlight_term(html, term) {
        Ok(out) => out,
        Err(err) => {
            warn!(error = %err, "search term not highlighted");
            html.to_string()
        }
    }
}

/// Like [`highlight_term`], but reports a pattern that cannot be built.
pub fn try_highlight_term(html: &str, term: &str) -> Result<String> {
    let pattern = term_pattern(term)?;
    let out = pattern.replace_all(html, |caps: &Captures<'_>| {
        let matched = caps.get(0).map_or("", |m| m.as_str());
        format!(r#"<mark style="{HIGHLIGHT_STYLE}">{matched}</mark>"#)
    });
    Ok(out.into_owned())
}
