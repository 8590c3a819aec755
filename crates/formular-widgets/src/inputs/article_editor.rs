//! Rich-text article editor.
//!
//! The control is a plain textarea; everything interesting lives in the
//! client-side options payload handed to the editor. The payload starts
//! from a large defaults tree, takes caller overrides from the `input_js`
//! section, and finishes with two computed entries: the attachment-storage
//! flag and the stylesheet list the editor loads into its frame.

use super::{InputState, InputVariant};
use formular_core::{FieldValue, Markup, StorageHint, ViewContext};
use serde_json::{json, Value};

/// Rich-text editor variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleEditor;

impl ArticleEditor {
    /// Default client-side options.
    #[must_use]
    pub fn defaults() -> Value {
        json!({
            "active_storage": null,
            "css": ["/assets/article_editor/arx-frame.min.css"],
            "custom": {
                "css": ["/assets/formular_article_editor.css"],
            },
            "align": {
                "left": "text-left",
                "center": "text-center",
                "right": "text-right",
                "justify": false,
            },
            "makebutton": {
                "items": {
                    "primary": {
                        "title": "Primary",
                        "params": {"classname": "btn btn-primary"},
                    },
                    "secondary": {
                        "title": "Secondary",
                        "params": {"classname": "btn btn-secondary"},
                    },
                    "danger": {
                        "title": "Danger",
                        "params": {"classname": "btn btn-danger"},
                    },
                    "primary_large": {
                        "title": "Primary (large)",
                        "params": {"classname": "btn btn-lg btn-primary"},
                    },
                    "secondary_large": {
                        "title": "Secondary (large)",
                        "params": {"classname": "btn btn-lg btn-secondary"},
                    },
                    "danger_large": {
                        "title": "Danger (large)",
                        "params": {"classname": "btn btn-lg btn-danger"},
                    },
                },
            },
            "classes": {
                "table": "table",
            },
            "embed": {
                // Embeds keep their script tags.
                "script": false,
            },
            "filelink": null,
            "format": ["p", "h2", "h3", "h4", "h5", "ul", "ol"],
            "grid": {
                "classname": "row",
                "columns": 12,
                "gutter": "1px",
                "offset": {
                    "left": "15px",
                    "right": "15px",
                },
                "patterns": {
                    "6|6": "col-md-6|col-md-6",
                    "4|4|4": "col-md-4|col-md-4|col-md-4",
                    "3|3|3|3": "col-md-3|col-md-3|col-md-3|col-md-3",
                    "2|2|2|2|2|2": "col-md-2|col-md-2|col-md-2|col-md-2|col-md-2|col-md-2",
                    "3|6|3": "col-md-3|col-md-6|col-md-3",
                    "2|8|2": "col-md-2|col-md-8|col-md-2",
                    "5|7": "col-md-5|col-md-7",
                    "7|5": "col-md-7|col-md-5",
                    "4|8": "col-md-4|col-md-8",
                    "8|4": "col-md-8|col-md-4",
                    "3|9": "col-md-3|col-md-9",
                    "9|3": "col-md-9|col-md-3",
                    "2|10": "col-md-2|col-md-10",
                    "10|2": "col-md-10|col-md-2",
                    "12": "col-md-12",
                },
            },
            "layer": false,
            "link": {"size": 500},
            "outset": false,
            "plugins": [
                "blockcode", "carousel", "cellcolor", "collapse", "filelink",
                "imageposition", "imageresize", "inlineformat", "listitem",
                "makebutton", "removeformat", "reorder", "style",
            ],
            "quote": {
                "template": "<blockquote class=\"blockquote text-center\"><p class=\"mb-0\"><strong>A well-known quote, contained in a blockquote element.</strong></p></blockquote>",
            },
            "styles": {
                "table": {
                    "bordered": {"title": "Bordered", "classname": "table-bordered"},
                    "responsive": {"title": "Responsive", "classname": "table-responsive"},
                    "small": {"title": "Small", "classname": "table-sm"},
                    "striped": {"title": "Striped", "classname": "table-striped"},
                },
            },
            "cellcolors": {
                "primary": {"title": "Primary", "classname": "table-primary"},
                "secondary": {"title": "Secondary", "classname": "table-secondary"},
                "active": {"title": "Active", "classname": "table-active"},
                "success": {"title": "Success", "classname": "table-success"},
                "danger": {"title": "Danger", "classname": "table-danger"},
                "warning": {"title": "Warning", "classname": "table-warning"},
                "info": {"title": "Info", "classname": "table-info"},
                "light": {"title": "Light", "classname": "table-light"},
                "dark": {"title": "Dark", "classname": "table-dark"},
            },
        })
    }

    /// Extract the editable content. Rich-text values contribute their
    /// rendered HTML body; anything else uses the raw display value.
    #[must_use]
    pub fn content(value: &FieldValue) -> String {
        match value {
            FieldValue::Rich(rich) => rich.body_html().to_string(),
            other => other.display(),
        }
    }

    fn custom_css(ctx: &dyn ViewContext) -> Vec<String> {
        let mut css = Vec::new();
        if let Some(path) = ctx.asset_path("application.css") {
            css.push(path);
        }
        css.push("/assets/formular_article_editor.css".to_string());
        css
    }
}

impl InputVariant for ArticleEditor {
    fn input_html_options(&self, state: &InputState<'_>) -> Value {
        json!({
            "class": "formular_article_editor form-control",
            "id": state.field().tag_id(),
            "autocomplete": "off",
        })
    }

    fn input_js_options(&self, state: &mut InputState<'_>) -> Option<Value> {
        let hint = StorageHint::from_config(
            state.options_mut().take("active_storage").as_ref(),
        );
        let active = hint.resolve(state.ctx());

        let mut js = state.options_mut().take_section("input_js");
        js.reverse_merge(Self::defaults());
        js.set("active_storage", active);
        js.set("custom", json!({"css": Self::custom_css(state.ctx())}));
        Some(js.into_value())
    }

    fn build_input(&self, state: &mut InputState<'_>) -> Markup {
        let js = self.input_js_options(state);
        let defaults = self.input_html_options(state);
        let content = Self::content(state.field().get_value());
        state.text_area(defaults, js, &content)
    }
}
