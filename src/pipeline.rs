//! Render pipeline.
//!
//! Rendering is eight global rewrites, one per [`TagKind`], applied in
//! [`TagKind::PASS_ORDER`]. Each pass sees the output of the previous one,
//! so a decoded title that itself contains tag markup is rendered by a later
//! pass but left literal by an earlier one.

use std::borrow::Cow;

use regex::Captures;
use tracing::{debug, warn};

use crate::percent::try_decode;
use crate::tags::{emit_hashtag, emit_mention, emit_styled, emit_web_link, TagKind};
use crate::Options;

/// Runs the render passes and collects non-fatal warnings.
///
/// A `Pipeline` is cheap and meant to be created per render call.
#[derive(Debug)]
pub struct Pipeline<'o> {
    options: &'o Options,
    warnings: Vec<String>,
}

impl<'o> Pipeline<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    /// Render `content` to display HTML.
    ///
    /// Empty content renders to an empty string.
    pub fn render(&mut self, content: &str) -> String {
        let mut html = content.to_string();
        if html.is_empty() {
            return html;
        }

        for kind in TagKind::PASS_ORDER {
            if let Some(rewritten) = self.apply_pass(kind, &html) {
                html = rewritten;
            }
        }

        html
    }

    /// Apply the pass for one tag kind, `None` when nothing matched.
    pub fn apply_pass(&mut self, kind: TagKind, html: &str) -> Option<String> {
        let mut count = 0usize;
        let rewritten = kind.pattern().replace_all(html, |caps: &Captures<'_>| {
            count += 1;
            self.emit(kind, caps)
        });

        match rewritten {
            Cow::Borrowed(_) => None,
            Cow::Owned(out) => {
                debug!(kind = kind.as_str(), count, "render pass rewrote tags");
                Some(out)
            }
        }
    }

    /// Warnings collected so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    fn emit(&mut self, kind: TagKind, caps: &Captures<'_>) -> String {
        if let Some(element) = kind.style_element() {
            let title = self.decode(kind, "title", group(caps, 1));
            return emit_styled(element, &title);
        }

        match kind {
            TagKind::Hashtag => {
                let title = self.decode(kind, "title", group(caps, 2));
                emit_hashtag(group(caps, 1), &title, self.options)
            }
            TagKind::Mention => {
                let title = self.decode(kind, "title", group(caps, 2));
                emit_mention(&title)
            }
            TagKind::WebUrl | TagKind::Web => {
                let title = self.decode(kind, "title", group(caps, 2));
                let href = self.decode(kind, "href", group(caps, 1));
                emit_web_link(&href, &title, self.options)
            }
            // Style kinds returned above.
            TagKind::TextBold
            | TagKind::TextItalic
            | TagKind::TextUnderline
            | TagKind::TextStrikethrough => group(caps, 0).to_string(),
        }
    }

    fn decode(&mut self, kind: TagKind, attr: &str, raw: &str) -> String {
        match try_decode(raw) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(kind = kind.as_str(), attr, error = %err, "keeping encoded attribute");
                self.warnings.push(format!("{kind} {attr}: {err}"));
                raw.to_string()
            }
        }
    }
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}
