//! Percentage cell.

use super::RowVariant;
use formular_core::{FieldValue, Markup, ViewContext};

/// Formats a numeric value as a percentage string via the context's
/// formatter. Absent values render no content at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentField;

impl RowVariant for PercentField {
    fn content(&self, value: &FieldValue, ctx: &dyn ViewContext) -> Option<Markup> {
        value
            .as_f64()
            .map(|n| Markup::text(&ctx.number_to_percent(n)))
    }
}
