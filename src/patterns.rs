//! Compiled regex patterns and markup fragments for rendering.
//!
//! All patterns are compiled once on first use via `LazyLock`. The markup
//! constants are reproduced byte-for-byte from the zsxq web client so that
//! rendered output can be compared against golden strings.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Inline Tag Patterns
// =============================================================================

/// `<e type="text_bold" title="..." />`
pub static TEXT_BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="text_bold"\s+title="([^"]+)"\s*/>"#).expect("TEXT_BOLD regex")
});

/// `<e type="text_italic" title="..." />`
pub static TEXT_ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="text_italic"\s+title="([^"]+)"\s*/>"#).expect("TEXT_ITALIC regex")
});

/// `<e type="text_underline" title="..." />`
pub static TEXT_UNDERLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="text_underline"\s+title="([^"]+)"\s*/>"#)
        .expect("TEXT_UNDERLINE regex")
});

/// `<e type="text_strikethrough" title="..." />`
pub static TEXT_STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="text_strikethrough"\s+title="([^"]+)"\s*/>"#)
        .expect("TEXT_STRIKETHROUGH regex")
});

/// `<e type="hashtag" hid="..." title="..." />`
pub static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="hashtag"\s+hid="([^"]+)"\s+title="([^"]+)"\s*/>"#)
        .expect("HASHTAG regex")
});

/// `<e type="mention" uid="..." title="..." />`
pub static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="mention"\s+uid="([^"]+)"\s+title="([^"]+)"\s*/>"#)
        .expect("MENTION regex")
});

/// `<e type="web_url" href="..." title="..." />`
pub static WEB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="web_url"\s+href="([^"]+)"\s+title="([^"]+)"\s*/>"#)
        .expect("WEB_URL regex")
});

/// `<e type="web" href="..." title="..." />`
pub static WEB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<e\s+type="web"\s+href="([^"]+)"\s+title="([^"]+)"\s*/>"#)
        .expect("WEB regex")
});

// =============================================================================
// Text Extraction Patterns
// =============================================================================

/// Any HTML element boundary: opening, closing or self-closing tag.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG regex"));

// =============================================================================
// Emitted Markup
// =============================================================================

/// Attributes shared by every anchor that leaves the page.
pub const NEW_CONTEXT_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Classes of the hashtag anchor.
pub const HASHTAG_CLASS: &str =
    "text-blue-600 hover:text-blue-800 font-medium no-underline transition-colors";

/// Classes of the mention span.
pub const MENTION_CLASS: &str = "text-green-600 font-medium";

/// Style of the outer inline-flex wrapper around rich links.
pub const LINK_WRAPPER_STYLE: &str =
    "display: inline-flex; align-items: center; vertical-align: middle;";

/// Style of the rich link anchor.
pub const LINK_ANCHOR_STYLE: &str =
    "display: inline-flex; align-items: center; text-decoration: none; color: #2563eb;";

/// Style of the rich link title span.
pub const LINK_TITLE_STYLE: &str = "vertical-align: middle;";

/// Alt text of the platform logo.
pub const LOGO_ALT: &str = "知识星球";

/// Style of the platform logo, including the color filter that tints it green.
pub const LOGO_STYLE: &str = "display: inline-block; width: 16px; height: 16px; margin-right: 4px; vertical-align: middle; filter: brightness(0) saturate(100%) invert(47%) sepia(69%) saturate(959%) hue-rotate(121deg) brightness(98%) contrast(86%);";

/// Generic "external link" icon for links outside the platform.
pub const EXTERNAL_LINK_ICON: &str = r#"<svg style="display: inline-block; width: 16px; height: 16px; margin-right: 4px; vertical-align: middle;" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"></path></svg>"#;

/// Inline style of the search highlight marker.
pub const HIGHLIGHT_STYLE: &str =
    "background-color: #fef08a; color: #000; padding: 0 2px; border-radius: 2px;";
