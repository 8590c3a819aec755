//! Clear button.

use super::{InputState, InputVariant};
use crate::icons;
use formular_core::{Config, Markup, Tag};
use serde_json::{json, Value};

/// Clear-button variant. Renders a button, optionally with a leading icon
/// taken from the consumed `icon` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clear;

impl Clear {
    fn icon_name(state: &mut InputState<'_>) -> Option<String> {
        state
            .input_mut()
            .take_str("icon")
            .or_else(|| state.options_mut().take_str("icon"))
    }
}

impl InputVariant for Clear {
    fn input_html_options(&self, state: &InputState<'_>) -> Value {
        json!({
            "class": "btn btn-primary",
            "type": "clear",
            "id": state.field().tag_id(),
        })
    }

    fn to_html(&self, state: &mut InputState<'_>) -> Markup {
        let icon = Self::icon_name(state)
            .map_or_else(Markup::empty, |name| {
                icons::icon(&name, Config::new(), state.ctx())
            });

        let mut attrs = state.take_input();
        attrs.reverse_merge(self.input_html_options(state));

        Tag::new("button")
            .attrs(attrs.into_attrs())
            .body(icon)
            .text(&state.field().label_text())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formular_core::{DefaultContext, Field};

    fn render(field: &Field, config: Value) -> String {
        let mut state = InputState::new(field, Config::from_value(config), &DefaultContext);
        Clear.to_html(&mut state).into_string()
    }

    #[test]
    fn test_renders_button_with_defaults() {
        let field = Field::new("clear");
        let html = render(&field, json!({}));
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"type="clear""#));
        assert!(html.contains(">Clear</button>"));
    }

    #[test]
    fn test_no_icon_by_default() {
        let field = Field::new("clear");
        assert!(!render(&field, json!({})).contains("eb-icon"));
    }

    #[test]
    fn test_consumed_icon_key_renders_leading_icon() {
        let field = Field::new("clear_search");
        let html = render(&field, json!({"icon": "x"}));
        assert!(html.contains("eb-icon-x"));
        assert!(!html.contains(r#"icon="x""#));
        let icon = html.find("eb-icon-x").unwrap();
        let label = html.find("Clear search").unwrap();
        assert!(icon < label);
    }

    #[test]
    fn test_caller_input_attrs_win() {
        let field = Field::new("clear");
        let html = render(&field, json!({"input": {"class": "btn-sm"}}));
        assert!(html.contains(r#"class="btn-sm btn btn-primary""#));
    }
}
