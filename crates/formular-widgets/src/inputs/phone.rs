//! Phone field.
//!
//! The input mask is picked from two fixed templates: landlines get an
//! extension suffix, cell and fax lines do not. Which template applies is
//! resolved from explicit `fax`/`cell` configuration keys when present,
//! otherwise by substring match against the field name. No format is
//! enforced server-side.

use super::{InputState, InputVariant};
use serde_json::{json, Value};

/// Mask for landline numbers, optional extension included.
pub const DEFAULT_TEL_MASK: &str = "(999) 999-9999? x99999";
/// Mask for cell and fax numbers.
pub const DEFAULT_CELL_MASK: &str = "(999) 999-9999";

/// Masked phone field variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneField;

impl PhoneField {
    /// Resolve a classification flag: an explicit key wins outright,
    /// otherwise the field name decides.
    fn classify(state: &mut InputState<'_>, key: &str) -> bool {
        let name_hit = state.field().name().contains(key);
        match state.options_mut().take(key) {
            None => name_hit,
            Some(Value::Bool(b)) => b,
            Some(Value::Null) => false,
            Some(_) => true,
        }
    }
}

impl InputVariant for PhoneField {
    fn input_html_options(&self, state: &InputState<'_>) -> Value {
        json!({
            "class": "form-control formular_phone",
            "placeholder": "(555) 555-5555",
            "id": state.field().tag_id(),
        })
    }

    fn input_js_options(&self, state: &mut InputState<'_>) -> Option<Value> {
        let fax = Self::classify(state, "fax");
        let cell = Self::classify(state, "cell");
        let mask = if cell || fax {
            DEFAULT_CELL_MASK
        } else {
            DEFAULT_TEL_MASK
        };
        Some(json!({"mask": mask, "placeholder": "_"}))
    }

    fn input_group_icon(&self) -> Option<&'static str> {
        Some("phone")
    }
}
