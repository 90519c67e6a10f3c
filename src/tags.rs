//! Inline tag kinds and their HTML emitters.
//!
//! Every tag kind has one regex (see `patterns`) and one emitter. Emitters
//! here take attribute values that are already percent-decoded; decoding and
//! warning collection happen in [`crate::pipeline`].

use std::fmt;

use regex::Regex;

use crate::patterns::{
    EXTERNAL_LINK_ICON, HASHTAG, HASHTAG_CLASS, LINK_ANCHOR_STYLE, LINK_TITLE_STYLE,
    LINK_WRAPPER_STYLE, LOGO_ALT, LOGO_STYLE, MENTION, MENTION_CLASS, NEW_CONTEXT_ATTRS,
    TEXT_BOLD, TEXT_ITALIC, TEXT_STRIKETHROUGH, TEXT_UNDERLINE, WEB, WEB_URL,
};
use crate::percent::encode_component;
use crate::Options;

/// The eight inline tag kinds of the source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    TextBold,
    TextItalic,
    TextUnderline,
    TextStrikethrough,
    Hashtag,
    Mention,
    /// Legacy name of [`TagKind::Web`]; rendered identically.
    WebUrl,
    Web,
}

impl TagKind {
    /// The order in which the render pipeline applies one pass per kind.
    ///
    /// Changing it changes output for content whose decoded titles contain
    /// tag markup.
    pub const PASS_ORDER: [TagKind; 8] = [
        TagKind::TextBold,
        TagKind::Hashtag,
        TagKind::TextItalic,
        TagKind::TextStrikethrough,
        TagKind::TextUnderline,
        TagKind::WebUrl,
        TagKind::Web,
        TagKind::Mention,
    ];

    /// Value of the `type` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TagKind::TextBold => "text_bold",
            TagKind::TextItalic => "text_italic",
            TagKind::TextUnderline => "text_underline",
            TagKind::TextStrikethrough => "text_strikethrough",
            TagKind::Hashtag => "hashtag",
            TagKind::Mention => "mention",
            TagKind::WebUrl => "web_url",
            TagKind::Web => "web",
        }
    }

    /// Parse a `type` attribute value.
    #[must_use]
    pub fn from_type(value: &str) -> Option<Self> {
        Self::PASS_ORDER.into_iter().find(|k| k.as_str() == value)
    }

    /// Pattern matching one complete tag element of this kind.
    #[must_use]
    pub fn pattern(self) -> &'static Regex {
        match self {
            TagKind::TextBold => &TEXT_BOLD,
            TagKind::TextItalic => &TEXT_ITALIC,
            TagKind::TextUnderline => &TEXT_UNDERLINE,
            TagKind::TextStrikethrough => &TEXT_STRIKETHROUGH,
            TagKind::Hashtag => &HASHTAG,
            TagKind::Mention => &MENTION,
            TagKind::WebUrl => &WEB_URL,
            TagKind::Web => &WEB,
        }
    }

    /// Inline element wrapping a text-style run, `None` for the other kinds.
    #[must_use]
    pub const fn style_element(self) -> Option<&'static str> {
        match self {
            TagKind::TextBold => Some("strong"),
            TagKind::TextItalic => Some("em"),
            TagKind::TextUnderline => Some("u"),
            TagKind::TextStrikethrough => Some("del"),
            _ => None,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap a decoded title in an inline element: `<strong>title</strong>`.
#[must_use]
pub fn emit_styled(element: &str, title: &str) -> String {
    format!("<{element}>{title}</{element}>")
}

/// Strip one leading and one trailing `#` from a hashtag title.
#[must_use]
pub fn clean_hashtag_title(title: &str) -> &str {
    let title = title.strip_prefix('#').unwrap_or(title);
    title.strip_suffix('#').unwrap_or(title)
}

/// Strip every leading `@` from a mention title.
#[must_use]
pub fn clean_mention_title(title: &str) -> &str {
    title.trim_start_matches('@')
}

/// Line break followed by a link to the hashtag listing page.
#[must_use]
pub fn emit_hashtag(hid: &str, title: &str, options: &Options) -> String {
    let clean = clean_hashtag_title(title);
    format!(
        r#"<br><a href="{base}/{segment}/{hid}" {NEW_CONTEXT_ATTRS} class="{HASHTAG_CLASS}">#{clean}</a>"#,
        base = options.tag_base_url,
        segment = encode_component(clean),
    )
}

/// Line break followed by an accent-colored `@name` span.
///
/// The user id is not rendered.
#[must_use]
pub fn emit_mention(title: &str) -> String {
    let clean = clean_mention_title(title);
    format!(r#"<br><span class="{MENTION_CLASS}">@{clean}</span>"#)
}

/// Icon placed in front of a rich link title.
#[must_use]
pub fn link_icon(href: &str, options: &Options) -> String {
    if options.is_internal_link(href) {
        format!(
            r#"<img src="{src}" alt="{LOGO_ALT}" style="{LOGO_STYLE}" />"#,
            src = options.logo_url
        )
    } else {
        EXTERNAL_LINK_ICON.to_string()
    }
}

/// Rich link used for both `web_url` and `web` tags.
#[must_use]
pub fn emit_web_link(href: &str, title: &str, options: &Options) -> String {
    let icon = link_icon(href, options);
    format!(
        r#"<span style="{LINK_WRAPPER_STYLE}"><a href="{href}" {NEW_CONTEXT_ATTRS} style="{LINK_ANCHOR_STYLE}">{icon}<span style="{LINK_TITLE_STYLE}">{title}</span></a></span>"#
    )
}
