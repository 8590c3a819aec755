//! Boolean summary row.

use super::RowVariant;
use formular_core::{FieldValue, Markup, Tag, ViewContext};

/// Renders a full-width summary row: a colored YES/NO badge followed by
/// the row's label, in a single cell spanning both columns. The row class
/// is derived by slugifying the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean;

impl RowVariant for Boolean {
    fn content(&self, value: &FieldValue, _ctx: &dyn ViewContext) -> Option<Markup> {
        let (text, class) = if value.is_truthy() {
            ("YES", "badge badge-success mr-2")
        } else {
            ("NO", "badge badge-danger mr-2")
        };
        Some(Tag::new("span").class(class).text(text).build())
    }

    fn to_html(&self, label: &str, value: &FieldValue, ctx: &dyn ViewContext) -> Markup {
        let badge = self
            .content(value, ctx)
            .and_then(Markup::presence)
            .unwrap_or_else(|| Markup::text("-"));

        Tag::new("tr")
            .class(format!(
                "formular-table-summary-{}",
                ctx.parameterize(label)
            ))
            .body(
                Tag::new("td")
                    .attr("colspan", 2)
                    .body(badge)
                    .text(label)
                    .build(),
            )
            .build()
    }
}
