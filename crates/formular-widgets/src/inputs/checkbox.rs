//! Checkbox input.
//!
//! The wrapper, label, and control class sets come from the four fixed
//! outcomes of the `custom` × `inline` facet matrix. A hidden companion
//! field posts `0` when the box is unchecked, so the parameter is always
//! present in the submission.

use super::{InputState, InputVariant, Layout};
use formular_core::{content_tag, Markup, Tag};
use serde_json::{json, Value};

/// Checkbox input variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckBox;

impl CheckBox {
    fn build_content(&self, state: &mut InputState<'_>) -> Markup {
        let input = self.build_input(state);
        let label_opts = self.label_options(state);
        let label = state.build_label(label_opts);
        let feedback = state.build_feedback();
        let hint = state.build_hint();

        let mut wrapper = state.take_wrapper();
        wrapper.reverse_merge(self.wrapper_options(state));
        content_tag("div", wrapper.into_attrs(), input + label + feedback + hint)
    }
}

impl InputVariant for CheckBox {
    fn input_html_options(&self, state: &InputState<'_>) -> Value {
        let class = if state.facets().custom {
            "custom-control-input"
        } else {
            "form-check-input"
        };
        json!({"class": class, "id": state.field().tag_id()})
    }

    fn build_input(&self, state: &mut InputState<'_>) -> Markup {
        let hidden = Tag::new("input")
            .attr("type", "hidden")
            .attr("name", state.field().name())
            .attr("value", "0")
            .build();

        let mut attrs = state.take_input();
        attrs.reverse_merge(self.input_html_options(state));
        attrs.set("type", "checkbox");
        attrs.set("name", state.field().name());
        if !attrs.contains("value") {
            attrs.set("value", "1");
        }
        if state.field().get_value().is_truthy() {
            attrs.set("checked", true);
        }
        if !state.field().is_valid() {
            attrs.merge_class("is-invalid");
        }

        hidden + Tag::new("input").attrs(attrs.into_attrs()).build()
    }

    fn wrapper_options(&self, state: &InputState<'_>) -> Value {
        let facets = state.facets();
        let class = if facets.custom && facets.inline {
            "form-group custom-control custom-checkbox custom-control-inline"
        } else if facets.custom {
            "form-group custom-control custom-checkbox"
        } else if facets.inline {
            "form-check form-check-inline"
        } else {
            "form-check"
        };
        json!({"class": class})
    }

    fn label_options(&self, state: &InputState<'_>) -> Value {
        let class = if state.facets().custom {
            "custom-control-label"
        } else {
            "form-check-label"
        };
        json!({"class": class})
    }

    fn to_html(&self, state: &mut InputState<'_>) -> Markup {
        match state.layout() {
            Layout::Horizontal => {
                let lead = Tag::new("div").class("col-sm-2").build();
                let content = Tag::new("div")
                    .class("col-sm-10")
                    .body(self.build_content(state))
                    .build();
                Tag::new("div")
                    .class("form-group row")
                    .body(lead)
                    .body(content)
                    .build()
            }
            Layout::Vertical | Layout::Inline => self.build_content(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formular_core::{Config, DefaultContext, Field};

    fn render(field: &Field, config: Value) -> String {
        let mut state = InputState::new(field, Config::from_value(config), &DefaultContext);
        CheckBox.to_html(&mut state).into_string()
    }

    #[test]
    fn test_custom_default_class_set() {
        let field = Field::new("accept");
        let html = render(&field, json!({}));
        assert!(html.contains("form-group custom-control custom-checkbox"));
        assert!(html.contains("custom-control-input"));
        assert!(html.contains("custom-control-label"));
    }

    #[test]
    fn test_custom_inline_class_set() {
        let field = Field::new("accept");
        let html = render(&field, json!({"input": {"inline": true}}));
        assert!(html.contains(
            "form-group custom-control custom-checkbox custom-control-inline"
        ));
    }

    #[test]
    fn test_plain_class_set() {
        let field = Field::new("accept");
        let html = render(&field, json!({"custom": false}));
        assert!(html.contains(r#"class="form-check""#));
        assert!(html.contains("form-check-input"));
        assert!(html.contains("form-check-label"));
        assert!(!html.contains("custom-control"));
    }

    #[test]
    fn test_plain_inline_class_set() {
        let field = Field::new("accept");
        let html = render(&field, json!({"custom": false, "input": {"inline": true}}));
        assert!(html.contains("form-check form-check-inline"));
    }

    #[test]
    fn test_hidden_companion_field_comes_first() {
        let field = Field::new("accept");
        let html = render(&field, json!({}));
        let hidden = html.find(r#"type="hidden""#).unwrap();
        let checkbox = html.find(r#"type="checkbox""#).unwrap();
        assert!(hidden < checkbox);
        assert!(html.contains(r#"value="0""#));
        assert!(html.contains(r#"value="1""#));
    }

    #[test]
    fn test_checked_from_truthy_value() {
        let field = Field::new("accept").value(true);
        assert!(render(&field, json!({})).contains("checked"));

        let field = Field::new("accept").value(false);
        assert!(!render(&field, json!({})).contains("checked"));
    }

    #[test]
    fn test_horizontal_layout_has_one_leading_empty_column() {
        let field = Field::new("accept");
        let html = render(&field, json!({"layout": "horizontal"}));
        assert!(html.starts_with(r#"<div class="form-group row">"#));
        assert_eq!(html.matches(r#"<div class="col-sm-2"></div>"#).count(), 1);
        assert!(html.contains(r#"<div class="col-sm-10">"#));
    }

    #[test]
    fn test_consumed_facet_keys_never_render() {
        let field = Field::new("accept");
        let html = render(&field, json!({"custom": false, "input": {"inline": true}}));
        assert!(!html.contains("custom="));
        assert!(!html.contains("inline="));
    }

    #[test]
    fn test_label_for_matches_input_id() {
        let field = Field::new("user[accept]");
        let html = render(&field, json!({}));
        assert!(html.contains(r#"id="user_accept""#));
        assert!(html.contains(r#"for="user_accept""#));
    }

    #[test]
    fn test_error_adds_invalid_class_and_feedback() {
        let field = Field::new("accept").error("must be accepted");
        let html = render(&field, json!({}));
        assert!(html.contains("is-invalid"));
        assert!(html.contains(r#"<div class="invalid-feedback">must be accepted</div>"#));
    }
}
