//! Result types for render output.

use serde::Serialize;

/// Everything derived from one content string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    /// Display HTML.
    pub html: String,

    /// Plain text of `html`, with tags and attribute values removed.
    pub text: String,

    /// Non-fatal issues hit while rendering, such as attribute values that
    /// failed to percent-decode and were kept encoded.
    pub warnings: Vec<String>,
}

/// Trusted HTML in the shape UI layers inject directly.
///
/// Serializes as `{"__html": "..."}`.
///
/// ```rust
/// use rs_zsxq_render::create_safe_html;
///
/// let safe = create_safe_html(r#"<e type="text_bold" title="hi" />"#);
/// let json = serde_json::to_string(&safe)?;
/// assert_eq!(json, r#"{"__html":"<strong>hi</strong>"}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SafeHtml {
    #[serde(rename = "__html")]
    pub html: String,
}

impl SafeHtml {
    #[must_use]
    pub fn into_inner(self) -> String {
        self.html
    }
}

impl From<String> for SafeHtml {
    fn from(html: String) -> Self {
        Self { html }
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.html
    }
}
