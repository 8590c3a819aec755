//! The tag-building primitive.
//!
//! Every markup fragment in this workspace bottoms out here: a tag name,
//! an attribute mapping, and a body. Attribute values are escaped on the
//! way out; nested `data`/`aria` objects flatten to `data-*`/`aria-*`
//! attributes the way form helpers expect.
//!
//! # Examples
//!
//! ```
//! use formular_core::{Markup, Tag};
//!
//! let html = Tag::new("a")
//!     .attr("href", "/posts")
//!     .class("btn")
//!     .text("All posts")
//!     .build();
//! assert_eq!(html.as_str(), r#"<a class="btn" href="/posts">All posts</a>"#);
//! ```

use crate::config::Attrs;
use crate::markup::{escape, Markup};
use serde_json::Value;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Builder for a single HTML element.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    name: String,
    attrs: Attrs,
    body: Markup,
}

impl Tag {
    /// Start building an element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attrs::new(),
            body: Markup::empty(),
        }
    }

    /// Set a single attribute, replacing any existing value.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Append to the `class` attribute.
    #[must_use]
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref();
        let merged = match self.attrs.get("class").and_then(Value::as_str) {
            Some(existing) if !existing.is_empty() => format!("{existing} {classes}"),
            _ => classes.to_string(),
        };
        self.attrs.insert("class".into(), Value::String(merged));
        self
    }

    /// Merge a whole attribute mapping; later values replace earlier ones.
    #[must_use]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        for (key, value) in attrs {
            self.attrs.insert(key, value);
        }
        self
    }

    /// Append a child fragment to the body.
    #[must_use]
    pub fn body(mut self, body: Markup) -> Self {
        self.body.push(body);
        self
    }

    /// Append escaped text to the body.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.body.push_text(text);
        self
    }

    /// Render the element.
    #[must_use]
    pub fn build(self) -> Markup {
        let mut out = String::with_capacity(32 + self.body.as_str().len());
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attrs {
            push_attr(&mut out, key, value);
        }
        out.push('>');

        if !VOID_ELEMENTS.contains(&self.name.as_str()) {
            out.push_str(self.body.as_str());
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
        }

        Markup::raw(out)
    }
}

/// Render an element in one call.
#[must_use]
pub fn content_tag(name: &str, attrs: Attrs, body: Markup) -> Markup {
    Tag::new(name).attrs(attrs).body(body).build()
}

fn push_attr(out: &mut String, key: &str, value: &Value) {
    match value {
        // Absent and switched-off attributes vanish entirely.
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => {
            out.push(' ');
            out.push_str(key);
        }
        Value::String(s) => push_pair(out, key, s),
        Value::Number(n) => push_pair(out, key, &n.to_string()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(" ");
            push_pair(out, key, &joined);
        }
        Value::Object(nested) if key == "data" || key == "aria" => {
            for (sub, value) in nested {
                push_nested_attr(out, &format!("{key}-{sub}"), value);
            }
        }
        Value::Object(_) => {
            // Arbitrary objects serialize to JSON, as client-side payloads.
            push_pair(out, key, &value.to_string());
        }
    }
}

fn push_nested_attr(out: &mut String, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        // Nested flags render literally: data-remote="true".
        Value::Bool(b) => push_pair(out, key, if *b { "true" } else { "false" }),
        Value::String(s) => push_pair(out, key, s),
        Value::Number(n) => push_pair(out, key, &n.to_string()),
        other => push_pair(out, key, &other.to_string()),
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
