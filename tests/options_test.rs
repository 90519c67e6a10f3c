use rs_zsxq_render::{
    extract_plain_text, extract_plain_text_with_options, highlight, highlight_with_options, render,
    render_with_options, Error, Options,
};

const CONTENT: &str = r#"<e type="hashtag" hid="1" title="%23rust%23" /> <e type="web" href="https://t.zsxq.com/x" title="post" />"#;

#[test]
fn options_default_values_are_the_platform_ones() {
    let options = Options::default();
    assert_eq!(options.tag_base_url, "https://wx.zsxq.com/tags");
    assert_eq!(options.internal_link_domains, vec!["t.zsxq.com", "zsxq.com"]);
    assert_eq!(options.logo_url, "https://zsxq.com/assets/img/zsxq_logo@2x.png");
}

#[test]
fn default_entry_points_match_explicit_default_options() {
    let options = Options::default();
    assert_eq!(render(CONTENT), render_with_options(CONTENT, &options));
    assert_eq!(
        extract_plain_text(CONTENT),
        extract_plain_text_with_options(CONTENT, &options)
    );
    assert_eq!(
        highlight(CONTENT, Some("rust")),
        highlight_with_options(CONTENT, Some("rust"), &options)
    );
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        tag_base_url: "https://example.com/tags".to_string(),
        ..Options::default()
    };
    let html = render_with_options(CONTENT, &options);
    assert!(html.contains(r#"href="https://example.com/tags/rust/1""#));
    // Link classification still uses the default domains.
    assert!(html.contains("zsxq_logo@2x.png"));
}

#[test]
fn options_load_from_json() {
    let options: Options = serde_json::from_str(
        r#"{"internal_link_domains": ["example.com"], "logo_url": "https://example.com/l.png"}"#,
    )
    .expect("valid json");
    assert!(options.validate().is_ok());
    assert_eq!(options.tag_base_url, "https://wx.zsxq.com/tags");

    let html = render_with_options(CONTENT, &options);
    assert!(!html.contains("<img "));
    assert!(html.contains("<svg "));
}

#[test]
fn invalid_options_are_reported() {
    let options = Options {
        logo_url: "not a url".to_string(),
        ..Options::default()
    };
    match options.validate() {
        Err(Error::InvalidOptions(msg)) => assert!(msg.contains("logo_url")),
        other => panic!("expected InvalidOptions, got {other:?}"),
    }
}
