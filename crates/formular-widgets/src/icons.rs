//! Icon and icon-link helpers.
//!
//! [`icon`] turns a symbolic name into an inline SVG fragment; the
//! `*_icon_to` helpers bind a fixed icon and default title to a link
//! target. Caller options always win over the helper defaults.
//!
//! # Examples
//!
//! ```
//! use formular_core::{Config, DefaultContext};
//! use formular_widgets::icons::icon;
//! use serde_json::json;
//!
//! let html = icon("check", Config::from_value(json!({"class": "big-4"})), &DefaultContext);
//! assert!(html.as_str().contains(r#"class="big-4 eb-icon eb-icon-check""#));
//! ```

use formular_core::{Config, Markup, Tag, ViewContext};
use serde_json::json;

/// Render a symbolic icon as inline SVG.
///
/// A trailing `.svg` on the name is optional. Caller classes come first,
/// the generated `eb-icon eb-icon-{name}` pair last; a default
/// `nocomment` processing flag is merged in for the embedding primitive.
#[must_use]
pub fn icon(name: &str, config: Config, ctx: &dyn ViewContext) -> Markup {
    let name = name.strip_suffix(".svg").unwrap_or(name);
    let mut config = config;
    config.reverse_merge(json!({"nocomment": true}));
    config.merge_class(&format!("eb-icon eb-icon-{name}"));
    ctx.inline_svg(&format!("icons/{name}.svg"), config.into_attrs())
}

/// Wrap an icon in a link.
#[must_use]
pub fn icon_to(name: &str, url: &str, config: Config, ctx: &dyn ViewContext) -> Markup {
    let mut attrs = config;
    attrs.set("href", url);
    Tag::new("a")
        .attrs(attrs.into_attrs())
        .body(icon(name, Config::new(), ctx))
        .build()
}

/// "New" link with a plus icon.
#[must_use]
pub fn new_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "New"}));
    icon_to("plus", path, config, ctx)
}

/// "Show" link with an eye icon.
#[must_use]
pub fn show_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "Show"}));
    icon_to("eye", path, config, ctx)
}

/// "Edit" link with an edit icon.
#[must_use]
pub fn edit_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "Edit"}));
    icon_to("edit", path, config, ctx)
}

/// "Destroy" link with a trash icon, a destructive-method hint, and a
/// confirmation prompt.
#[must_use]
pub fn destroy_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({
        "title": "Destroy",
        "data": {"method": "delete", "confirm": "Delete this item?"},
    }));
    icon_to("trash", path, config, ctx)
}

/// "Settings" link with a cog icon.
#[must_use]
pub fn settings_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "Settings"}));
    icon_to("cog", path, config, ctx)
}

/// "OK" link.
#[must_use]
pub fn ok_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "OK"}));
    icon_to("ok", path, config, ctx)
}

/// "Approve" link, sharing the OK icon.
#[must_use]
pub fn approve_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "Approve"}));
    icon_to("ok", path, config, ctx)
}

/// "Remove" link.
#[must_use]
pub fn remove_icon_to(path: &str, mut config: Config, ctx: &dyn ViewContext) -> Markup {
    config.reverse_merge(json!({"title": "Remove"}));
    icon_to("remove", path, config, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formular_core::DefaultContext;
    use serde_json::Value;

    fn config(value: Value) -> Config {
        Config::from_value(value)
    }

    #[test]
    fn test_icon_generated_class_comes_last() {
        let html = icon("check", config(json!({"class": "big-4"})), &DefaultContext);
        assert!(html.as_str().contains(r#"class="big-4 eb-icon eb-icon-check""#));
    }

    #[test]
    fn test_icon_extension_is_optional() {
        let with = icon("check.svg", config(json!({"class": "big-4"})), &DefaultContext);
        let without = icon("check", config(json!({"class": "big-4"})), &DefaultContext);
        assert_eq!(with, without);
    }

    #[test]
    fn test_icon_references_conventional_path() {
        let html = icon("check", Config::new(), &DefaultContext);
        assert!(html.as_str().contains("icons/check.svg"));
    }

    #[test]
    fn test_icon_nocomment_flag_reaches_the_primitive() {
        struct Spy;
        impl ViewContext for Spy {
            fn inline_svg(&self, _path: &str, attrs: formular_core::Attrs) -> Markup {
                Markup::text(&format!("nocomment={}", attrs["nocomment"]))
            }
        }
        let html = icon("check", Config::new(), &Spy);
        assert_eq!(html.as_str(), "nocomment=true");
    }

    #[test]
    fn test_icon_to_wraps_in_link() {
        let html = icon_to("eye", "/posts/1", Config::new(), &DefaultContext);
        assert!(html.as_str().starts_with(r#"<a href="/posts/1">"#));
        assert!(html.as_str().contains("eb-icon-eye"));
        assert!(html.as_str().ends_with("</a>"));
    }

    #[test]
    fn test_new_icon_to_defaults() {
        let html = new_icon_to("/posts/new", Config::new(), &DefaultContext);
        assert!(html.as_str().contains(r#"title="New""#));
        assert!(html.as_str().contains("eb-icon-plus"));
    }

    #[test]
    fn test_destroy_icon_to_defaults() {
        let html = destroy_icon_to("/posts/1", Config::new(), &DefaultContext);
        assert!(html.as_str().contains(r#"title="Destroy""#));
        assert!(html.as_str().contains(r#"data-method="delete""#));
        assert!(html.as_str().contains(r#"data-confirm="Delete this item?""#));
        assert!(html.as_str().contains("eb-icon-trash"));
    }

    #[test]
    fn test_destroy_icon_to_caller_title_wins_but_confirm_stays() {
        let html = destroy_icon_to(
            "/posts/1",
            config(json!({"title": "Delete forever"})),
            &DefaultContext,
        );
        assert!(html.as_str().contains(r#"title="Delete forever""#));
        assert!(!html.as_str().contains(r#"title="Destroy""#));
        assert!(html.as_str().contains(r#"data-confirm="Delete this item?""#));
    }

    #[test]
    fn test_ok_and_approve_share_an_icon() {
        let ok = ok_icon_to("/x", Config::new(), &DefaultContext);
        let approve = approve_icon_to("/x", Config::new(), &DefaultContext);
        assert!(ok.as_str().contains("eb-icon-ok"));
        assert!(approve.as_str().contains("eb-icon-ok"));
        assert!(ok.as_str().contains(r#"title="OK""#));
        assert!(approve.as_str().contains(r#"title="Approve""#));
    }

    #[test]
    fn test_remaining_wrappers() {
        let show = show_icon_to("/x", Config::new(), &DefaultContext);
        assert!(show.as_str().contains("eb-icon-eye"));
        assert!(show.as_str().contains(r#"title="Show""#));

        let edit = edit_icon_to("/x", Config::new(), &DefaultContext);
        assert!(edit.as_str().contains("eb-icon-edit"));
        assert!(edit.as_str().contains(r#"title="Edit""#));

        let settings = settings_icon_to("/x", Config::new(), &DefaultContext);
        assert!(settings.as_str().contains("eb-icon-cog"));
        assert!(settings.as_str().contains(r#"title="Settings""#));

        let remove = remove_icon_to("/x", Config::new(), &DefaultContext);
        assert!(remove.as_str().contains("eb-icon-remove"));
        assert!(remove.as_str().contains(r#"title="Remove""#));
    }
}
