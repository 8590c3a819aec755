//! Email CC field.

use super::{InputState, InputVariant};
use serde_json::{json, Value};

/// Plain text field for a comma-separated address list, decorated with a
/// leading `at-sign` icon in an input group. The address list is not
/// validated server-side; that permissiveness is deliberate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailCcField;

impl InputVariant for EmailCcField {
    fn input_html_options(&self, state: &InputState<'_>) -> Value {
        json!({
            "class": "form-control",
            "placeholder": "one@example.com,two@example.com",
            "id": state.field().tag_id(),
        })
    }

    fn input_group_icon(&self) -> Option<&'static str> {
        Some("at-sign")
    }
}
