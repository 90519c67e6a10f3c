//! Configuration options for rendering.
//!
//! The `Options` struct holds the platform-specific constants baked into the
//! emitted markup. The defaults reproduce the zsxq web client output exactly;
//! overriding them is only useful for mirrors or test fixtures.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Default base of hashtag listing links.
pub const DEFAULT_TAG_BASE_URL: &str = "https://wx.zsxq.com/tags";

/// Default platform logo shown in front of internal links.
pub const DEFAULT_LOGO_URL: &str = "https://zsxq.com/assets/img/zsxq_logo@2x.png";

/// Default substrings that mark a link as platform-internal.
pub const DEFAULT_INTERNAL_LINK_DOMAINS: [&str; 2] = ["t.zsxq.com", "zsxq.com"];

/// Configuration options for rendering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the platform settings. Options can also be deserialized from JSON;
/// missing fields fall back to their defaults.
///
/// # Example
///
/// ```rust
/// use rs_zsxq_render::Options;
///
/// let options = Options {
///     tag_base_url: "https://mirror.example.com/tags".to_string(),
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Base URL of hashtag listing pages, without trailing slash.
    ///
    /// Hashtag links are emitted as `{tag_base_url}/{title}/{hid}`.
    ///
    /// Default: `https://wx.zsxq.com/tags`
    pub tag_base_url: String,

    /// Substrings that classify a decoded `href` as platform-internal.
    ///
    /// Matching is a plain substring test, not a host comparison.
    ///
    /// Default: `["t.zsxq.com", "zsxq.com"]`
    pub internal_link_domains: Vec<String>,

    /// Logo image used as the icon of platform-internal links.
    ///
    /// Default: `https://zsxq.com/assets/img/zsxq_logo@2x.png`
    pub logo_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tag_base_url: DEFAULT_TAG_BASE_URL.to_string(),
            internal_link_domains: DEFAULT_INTERNAL_LINK_DOMAINS
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
        }
    }
}

impl Options {
    /// Check that the configured URLs are absolute http(s) URLs and that at
    /// least one internal link domain is set.
    pub fn validate(&self) -> Result<()> {
        check_absolute_url("tag_base_url", &self.tag_base_url)?;
        check_absolute_url("logo_url", &self.logo_url)?;

        if self.tag_base_url.ends_with('/') {
            return Err(Error::InvalidOptions(
                "tag_base_url must not end with '/'".to_string(),
            ));
        }

        if self.internal_link_domains.iter().all(|d| d.trim().is_empty()) {
            return Err(Error::InvalidOptions(
                "internal_link_domains must contain at least one domain".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether a decoded `href` points at the platform itself.
    #[must_use]
    pub fn is_internal_link(&self, href: &str) -> bool {
        self.internal_link_domains
            .iter()
            .filter(|d| !d.is_empty())
            .any(|d| href.contains(d.as_str()))
    }
}

fn check_absolute_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| Error::InvalidOptions(format!("{field} is not a valid URL: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidOptions(format!(
            "{field} must use http or https, got {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(Error::InvalidOptions(format!("{field} has no host")));
    }

    Ok(())
}
