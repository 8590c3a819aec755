//! Remote submit link.
//!
//! Renders four stacked fragments — a check icon, a cross icon, a spinner,
//! and the link itself — whose visibility is toggled client-side as the
//! asynchronous submission progresses. Only the link is visible initially;
//! check and cross start hidden.

use super::{InputState, InputVariant};
use crate::icons;
use formular_core::{Config, Markup, Tag};
use serde_json::{json, Value};

/// Asynchronous submit link variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteLinkTo;

impl RemoteLinkTo {
    fn confirm(state: &mut InputState<'_>) -> String {
        state.options_mut().take_str("confirm").unwrap_or_else(|| {
            format!(
                "{} to<br>{}?",
                state.field().name(),
                state.field().get_object().unwrap_or_default()
            )
        })
    }

    fn status_icon(state: &InputState<'_>, name: &str, hidden: bool) -> Markup {
        let mut config = Config::new();
        if hidden {
            config.set("style", "display: none;");
        }
        icons::icon(name, config, state.ctx())
    }
}

impl InputVariant for RemoteLinkTo {
    fn input_html_options(&self, state: &InputState<'_>) -> Value {
        let _ = state;
        json!({"rel": "nofollow"})
    }

    fn build_input(&self, state: &mut InputState<'_>) -> Markup {
        let confirm = Self::confirm(state);
        let left = state.options_mut().take_bool("left") == Some(true);

        let mut attrs = state.take_input();
        attrs.reverse_merge(self.input_html_options(state));
        attrs.reverse_merge(json!({
            "data": {"method": "post", "remote": true, "confirm": confirm},
        }));
        let link = Tag::new("a")
            .attrs(attrs.into_attrs())
            .text(&state.field().label_text())
            .build();

        let fragments = [
            Self::status_icon(state, "check", true),
            Self::status_icon(state, "x", true),
            Self::status_icon(state, "spinner", false),
            link,
        ];

        if left {
            fragments.into_iter().rev().collect()
        } else {
            fragments.into_iter().collect()
        }
    }

    fn to_html(&self, state: &mut InputState<'_>) -> Markup {
        self.build_input(state)
    }
}
