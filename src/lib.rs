//! # rs-zsxq-render
//!
//! Renderer for the inline markup embedded in zsxq ("Knowledge Planet") posts.
//!
//! Post content is literal text mixed with self-closing tags such as
//! `<e type="hashtag" hid="123" title="%23go%23" />`. This crate turns such
//! content into display HTML, search-highlighted HTML, or plain text.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_zsxq_render::{extract_plain_text, highlight, render};
//!
//! let content = r#"Read <e type="text_bold" title="this" /> first"#;
//!
//! assert_eq!(render(content), "Read <strong>this</strong> first");
//! assert_eq!(extract_plain_text(content), "Read this first");
//! assert!(highlight(content, Some("first")).contains("<mark "));
//! ```
//!
//! ## Behavior
//!
//! - Rendering is eight global rewrites in a fixed order (see
//!   [`TagKind::PASS_ORDER`]); tags do not nest.
//! - Attribute values that fail to percent-decode are kept as-is and
//!   reported as warnings; no render function ever fails.
//! - Output is trusted markup: attribute values are not HTML-escaped.
//! - Highlighting matches inside the rendered HTML, including inside
//!   attributes and tag names.

mod error;
mod options;
mod patterns;
mod result;

/// Percent-decoding and component encoding of attribute values.
pub mod percent;

/// Tag kinds and their HTML emitters.
pub mod tags;

/// The fixed-order render pipeline.
pub mod pipeline;

/// Plain-text extraction from rendered HTML.
pub mod text;

/// Search term highlighting.
pub mod highlight;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use pipeline::Pipeline;
pub use result::{RenderResult, SafeHtml};
pub use tags::TagKind;

/// Renders content to display HTML using default options.
///
/// Empty content renders to an empty string.
///
/// # Example
///
/// ```rust
/// use rs_zsxq_render::render;
///
/// let html = render(r#"<e type="mention" uid="9" title="%40Alice" />"#);
/// assert_eq!(html, r#"<br><span class="text-green-600 font-medium">@Alice</span>"#);
/// ```
#[must_use]
pub fn render(content: &str) -> String {
    render_with_options(content, &Options::default())
}

/// Renders content to display HTML with custom options.
#[must_use]
pub fn render_with_options(content: &str, options: &Options) -> String {
    Pipeline::new(options).render(content)
}

/// Renders content and derives its plain text, collecting warnings.
///
/// # Example
///
/// ```rust
/// use rs_zsxq_render::{render_document, Options};
///
/// let result = render_document(r#"<e type="text_bold" title="100%" />"#, &Options::default());
/// assert_eq!(result.html, "<strong>100%</strong>");
/// assert_eq!(result.text, "100%");
/// assert_eq!(result.warnings.len(), 1);
/// ```
#[must_use]
pub fn render_document(content: &str, options: &Options) -> RenderResult {
    let mut pipeline = Pipeline::new(options);
    let html = pipeline.render(content);
    let text = text::strip_tags(&html);
    RenderResult {
        html,
        text,
        warnings: pipeline.into_warnings(),
    }
}

/// Renders content and strips all markup, returning trimmed plain text.
///
/// # Example
///
/// ```rust
/// use rs_zsxq_render::extract_plain_text;
///
/// assert_eq!(extract_plain_text(r#"<e type="text_bold" title="abc" />"#), "abc");
/// ```
#[must_use]
pub fn extract_plain_text(content: &str) -> String {
    extract_plain_text_with_options(content, &Options::default())
}

/// Plain-text extraction with custom options.
#[must_use]
pub fn extract_plain_text_with_options(content: &str, options: &Options) -> String {
    if content.is_empty() {
        return String::new();
    }
    text::strip_tags(&render_with_options(content, options))
}

/// Renders content and highlights `term` in the result.
///
/// With no term, or an empty one, this is exactly [`render`].
///
/// # Example
///
/// ```rust
/// use rs_zsxq_render::highlight;
///
/// assert_eq!(
///     highlight("cat and dog", Some("dog")),
///     r#"cat and <mark style="background-color: #fef08a; color: #000; padding: 0 2px; border-radius: 2px;">dog</mark>"#
/// );
/// ```
#[must_use]
pub fn highlight(content: &str, term: Option<&str>) -> String {
    highlight_with_options(content, term, &Options::default())
}

/// Highlighting with custom options.
#[must_use]
pub fn highlight_with_options(content: &str, term: Option<&str>, options: &Options) -> String {
    let html = render_with_options(content, options);
    match term {
        Some(term) if !term.is_empty() => highlight::highlight_term(&html, term),
        _ => html,
    }
}

/// Renders content into a [`SafeHtml`] wrapper.
#[must_use]
pub fn create_safe_html(content: &str) -> SafeHtml {
    SafeHtml::from(render(content))
}

/// Renders and highlights content into a [`SafeHtml`] wrapper.
#[must_use]
pub fn create_safe_html_with_highlight(content: &str, term: Option<&str>) -> SafeHtml {
    SafeHtml::from(highlight(content, term))
}
