use rs_zsxq_render::{render, render_with_options, Options};

const EXTERNAL_ICON: &str = r#"<svg style="display: inline-block; width: 16px; height: 16px; margin-right: 4px; vertical-align: middle;" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"></path></svg>"#;

const LOGO_ICON: &str = r#"<img src="https://zsxq.com/assets/img/zsxq_logo@2x.png" alt="知识星球" style="display: inline-block; width: 16px; height: 16px; margin-right: 4px; vertical-align: middle; filter: brightness(0) saturate(100%) invert(47%) sepia(69%) saturate(959%) hue-rotate(121deg) brightness(98%) contrast(86%);" />"#;

fn web_link(href: &str, icon: &str, title: &str) -> String {
    format!(
        r#"<span style="display: inline-flex; align-items: center; vertical-align: middle;"><a href="{href}" target="_blank" rel="noopener noreferrer" style="display: inline-flex; align-items: center; text-decoration: none; color: #2563eb;">{icon}<span style="vertical-align: middle;">{title}</span></a></span>"#
    )
}

#[test]
fn bold_renders_strong() {
    assert_eq!(
        render(r#"<e type="text_bold" title="hello" />"#),
        "<strong>hello</strong>"
    );
}

#[test]
fn italic_renders_em() {
    assert_eq!(
        render(r#"<e type="text_italic" title="%E6%96%9C%E4%BD%93" />"#),
        "<em>斜体</em>"
    );
}

#[test]
fn underline_renders_u() {
    assert_eq!(render(r#"<e type="text_underline" title="key%20point" />"#), "<u>key point</u>");
}

#[test]
fn strikethrough_renders_del() {
    assert_eq!(render(r#"<e type="text_strikethrough" title="old" />"#), "<del>old</del>");
}

#[test]
fn hashtag_renders_line_break_and_tag_link() {
    assert_eq!(
        render(r#"<e type="hashtag" hid="123" title="%23go" />"#),
        r#"<br><a href="https://wx.zsxq.com/tags/go/123" target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:text-blue-800 font-medium no-underline transition-colors">#go</a>"#
    );
}

#[test]
fn hashtag_with_closing_hash_and_unicode_title() {
    let html = render(r#"<e type="hashtag" hid="15522415881812" title="%23%E8%AF%BB%E4%B9%A6%23" />"#);
    assert!(html.starts_with("<br><a "));
    assert!(html.contains(r#"href="https://wx.zsxq.com/tags/%E8%AF%BB%E4%B9%A6/15522415881812""#));
    assert!(html.ends_with(">#读书</a>"));
}

#[test]
fn mention_renders_accent_span() {
    assert_eq!(
        render(r#"<e type="mention" uid="9" title="%40Alice" />"#),
        r#"<br><span class="text-green-600 font-medium">@Alice</span>"#
    );
}

#[test]
fn mention_collapses_repeated_at_signs_and_ignores_uid() {
    let html = render(r#"<e type="mention" uid="88412" title="@@%40Bob" />"#);
    assert_eq!(html, r#"<br><span class="text-green-600 font-medium">@Bob</span>"#);
    assert!(!html.contains("88412"));
}

#[test]
fn platform_web_link_uses_logo_icon() {
    assert_eq!(
        render(r#"<e type="web" href="https%3A%2F%2Ft.zsxq.com%2Fabc" title="Planet" />"#),
        web_link("https://t.zsxq.com/abc", LOGO_ICON, "Planet")
    );
}

#[test]
fn external_web_url_uses_generic_icon() {
    assert_eq!(
        render(r#"<e type="web_url" href="https%3A%2F%2Fexample.com%2Fa%3Fb%3D1" title="Example%20Site" />"#),
        web_link("https://example.com/a?b=1", EXTERNAL_ICON, "Example Site")
    );
}

#[test]
fn web_and_web_url_render_identically() {
    let attrs = r#"href="https%3A%2F%2Fwx.zsxq.com%2Fgroup%2F1" title="g" />"#;
    let web = render(&format!(r#"<e type="web" {attrs}"#));
    let web_url = render(&format!(r#"<e type="web_url" {attrs}"#));
    assert_eq!(web, web_url);
    assert!(web.contains(LOGO_ICON));
}

#[test]
fn href_is_emitted_without_escaping() {
    let html = render(r#"<e type="web" href="https://example.com/?a=1&b=2" title="t" />"#);
    assert!(html.contains(r#"href="https://example.com/?a=1&b=2""#));
}

#[test]
fn surrounding_text_is_untouched() {
    assert_eq!(
        render(r#"before <e type="text_bold" title="mid" /> after"#),
        "before <strong>mid</strong> after"
    );
}

#[test]
fn every_occurrence_is_rewritten() {
    let content = r#"<e type="text_bold" title="a" />,<e type="text_bold" title="b" />,<e type="text_bold" title="c" />"#;
    assert_eq!(render(content), "<strong>a</strong>,<strong>b</strong>,<strong>c</strong>");
}

#[test]
fn whitespace_inside_tag_is_flexible() {
    assert_eq!(
        render("<e   type=\"text_bold\"\n\ttitle=\"x\"/>"),
        "<strong>x</strong>"
    );
}

#[test]
fn empty_content_renders_empty() {
    assert_eq!(render(""), "");
}

#[test]
fn content_without_tags_is_unchanged() {
    let content = "just <b>html</b> & text\nwith lines";
    assert_eq!(render(content), content);
}

#[test]
fn custom_options_change_platform_urls() {
    let options = Options {
        tag_base_url: "https://mirror.example.com/t".to_string(),
        internal_link_domains: vec!["mirror.example.com".to_string()],
        logo_url: "https://mirror.example.com/logo.png".to_string(),
    };

    let tag = render_with_options(r#"<e type="hashtag" hid="1" title="x" />"#, &options);
    assert!(tag.contains(r#"href="https://mirror.example.com/t/x/1""#));

    let link = render_with_options(
        r#"<e type="web" href="https://mirror.example.com/p" title="p" />"#,
        &options,
    );
    assert!(link.contains(r#"<img src="https://mirror.example.com/logo.png""#));

    let zsxq = render_with_options(r#"<e type="web" href="https://t.zsxq.com/p" title="p" />"#, &options);
    assert!(zsxq.contains("<svg "));
}
