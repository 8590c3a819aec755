//! The capability bundle renderers borrow from the host.
//!
//! Renderers never reach into an ambient environment. Everything they need
//! from the hosting application — asset paths, SVG embedding, value
//! formatting, slugification, rich-text storage detection — arrives as a
//! [`ViewContext`] passed into each render call. The trait ships workable
//! defaults so [`DefaultContext`] works out of the box; hosts override the
//! pieces their framework provides.

use crate::config::Attrs;
use crate::markup::Markup;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendering capabilities supplied by the host.
pub trait ViewContext {
    /// Resolve a logical asset name to a servable path.
    fn asset_path(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Embed an SVG asset inline.
    ///
    /// The default renders an `<svg>` element referencing the asset; hosts
    /// with an asset pipeline typically splice the file contents instead.
    /// A `nocomment` flag in `attrs` is a processing hint, not an HTML
    /// attribute, and is dropped here.
    fn inline_svg(&self, path: &str, mut attrs: Attrs) -> Markup {
        attrs.remove("nocomment");
        let href = self
            .asset_path(path)
            .unwrap_or_else(|| format!("/assets/{path}"));
        Tag::new("svg")
            .attrs(attrs)
            .body(Tag::new("use").attr("href", format!("{href}#icon")).build())
            .build()
    }

    /// Format a fractional value as a percentage string.
    fn number_to_percent(&self, value: f64) -> String {
        format!("{:.1}%", value * 100.0)
    }

    /// Slugify text for use in a CSS class or DOM id.
    fn parameterize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if !out.is_empty() {
                out.push('-');
            }
            out.extend(word.chars().flat_map(char::to_lowercase));
        }
        out
    }

    /// Whether the host has rich-text attachment storage available.
    /// Answers [`StorageHint::Auto`] probes.
    fn rich_text_storage(&self) -> bool {
        false
    }
}

/// The stock capability bundle: trait defaults, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContext;

impl ViewContext for DefaultContext {}

/// Tri-state rich-text storage capability.
///
/// `Auto` defers to the integration layer ([`ViewContext`]); the renderer
/// itself never probes the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageHint {
    /// Storage is known to be available
    Enabled,
    /// Storage is known to be unavailable
    Disabled,
    /// Ask the context
    #[default]
    Auto,
}

impl StorageHint {
    /// Read a hint from a consumed configuration value. Absent or
    /// non-boolean values mean `Auto`.
    #[must_use]
    pub const fn from_config(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(true)) => Self::Enabled,
            Some(Value::Bool(false)) => Self::Disabled,
            _ => Self::Auto,
        }
    }

    /// Resolve to a concrete answer, consulting the context only for
    /// `Auto`.
    #[must_use]
    pub fn resolve(self, ctx: &dyn ViewContext) -> bool {
        match self {
            Self::Enabled => true,
            Self::Disabled => false,
            Self::Auto => ctx.rich_text_storage(),
        }
    }
}
