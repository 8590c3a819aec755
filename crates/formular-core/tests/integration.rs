//! Cross-module tests: configuration parsing through tag building.

use formular_core::{content_tag, Config, Markup, Tag, ViewContext};
use serde_json::json;

#[test]
fn test_parsed_config_renders_as_attributes() {
    let mut config = Config::parse(r#"{"class": "btn", "data": {"method": "delete"}, "custom": true}"#)
        .expect("valid JSON object");

    // A renderer consumes its private flag before emitting attributes.
    assert_eq!(config.take_bool("custom"), Some(true));

    let html = content_tag("a", config.into_attrs(), Markup::text("Delete"));
    assert_eq!(
        html.as_str(),
        r#"<a class="btn" data-method="delete">Delete</a>"#
    );
}

#[test]
fn test_defaults_merge_then_render() {
    let mut config = Config::from_value(json!({"placeholder": "(555) 555-5555"}));
    config.reverse_merge(json!({"placeholder": "unused default", "class": "form-control"}));

    let html = Tag::new("input").attrs(config.into_attrs()).build();
    assert_eq!(
        html.as_str(),
        r#"<input class="form-control" placeholder="(555) 555-5555">"#
    );
}

#[test]
fn test_untrusted_config_values_cannot_break_out() {
    let config = Config::from_value(json!({
        "title": r#""><script>alert(1)</script>"#,
    }));
    let html = Tag::new("div").attrs(config.into_attrs()).build();
    assert!(!html.as_str().contains("<script>"));
    assert!(html.as_str().contains("&quot;&gt;&lt;script&gt;"));
}

#[test]
fn test_context_capabilities_compose() {
    struct Host;
    impl ViewContext for Host {
        fn asset_path(&self, name: &str) -> Option<String> {
            Some(format!("/cdn/{name}"))
        }
    }

    let html = Host.inline_svg("icons/eye.svg", Config::new().into_attrs());
    assert!(html.as_str().contains("/cdn/icons/eye.svg#icon"));

    // Unrelated capabilities keep their defaults.
    assert_eq!(Host.number_to_percent(0.25), "25.0%");
    assert_eq!(Host.parameterize("Email CC"), "email-cc");
}
