//! The table-row rendering contract.
//!
//! Read-only display of a single labelled value. The contract has one
//! overridable step — `content`, formatting the value — and a default
//! composition that places label and content in a two-cell row. Absent
//! values render as empty content, never as an error.
//!
//! # Examples
//!
//! ```
//! use formular_core::{DefaultContext, FieldValue};
//! use formular_widgets::rows::TableRow;
//!
//! let html = TableRow::Percent.render("Capacity", &FieldValue::Number(0.5), &DefaultContext);
//! assert_eq!(html.as_str(), "<tr><td>Capacity</td><td>50.0%</td></tr>");
//! ```

mod boolean;
mod percent;

pub use boolean::Boolean;
pub use percent::PercentField;

use formular_core::{FieldValue, Markup, Tag, ViewContext};
use serde::{Deserialize, Serialize};

/// The overridable steps of the table-row contract.
pub trait RowVariant {
    /// Format the value for display. `None` means no content.
    fn content(&self, value: &FieldValue, ctx: &dyn ViewContext) -> Option<Markup>;

    /// Compose the full row.
    fn to_html(&self, label: &str, value: &FieldValue, ctx: &dyn ViewContext) -> Markup {
        let content = self.content(value, ctx).unwrap_or_default();
        Tag::new("tr")
            .body(Tag::new("td").text(label).build())
            .body(Tag::new("td").body(content).build())
            .build()
    }
}

/// The closed set of table-row variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRow {
    /// YES/NO badge summary row
    Boolean,
    /// Percentage-formatted cell
    Percent,
}

impl TableRow {
    /// Render a labelled value as a table row.
    #[must_use]
    pub fn render(self, label: &str, value: &FieldValue, ctx: &dyn ViewContext) -> Markup {
        self.variant().to_html(label, value, ctx)
    }

    fn variant(self) -> &'static dyn RowVariant {
        match self {
            Self::Boolean => &Boolean,
            Self::Percent => &PercentField,
        }
    }
}
