//! Per-render field descriptors.
//!
//! A [`Field`] bundles everything a renderer may ask about the thing it is
//! rendering: the submission name, the bound value, the display label of
//! the owning record, and any validation messages that record carries. A
//! descriptor is built for one render call and discarded afterwards.

use serde::{Deserialize, Serialize};

/// A rich-text value: content that has already been rendered to HTML by
/// the hosting application's rich-text storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    body: String,
}

impl RichText {
    /// Wrap a rendered HTML body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The rendered HTML body.
    #[must_use]
    pub fn body_html(&self) -> &str {
        &self.body
    }
}

/// The value bound to a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// No value bound
    #[default]
    Missing,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Plain text value
    Text(String),
    /// Rich-text value
    Rich(RichText),
}

impl FieldValue {
    /// Check whether a value is bound at all.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Loose truthiness, as checkbox state and boolean rows read it.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Missing => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.is_empty() && s != "false" && s != "0",
            Self::Rich(rich) => !rich.body_html().is_empty(),
        }
    }

    /// Numeric reading, when one exists.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Display text for a control's `value` attribute. Escaping happens at
    /// the tag builder; rich text yields its HTML body verbatim.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{n:.0}")
                } else {
                    n.to_string()
                }
            }
            Self::Text(s) => s.clone(),
            Self::Rich(rich) => rich.body_html().to_string(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<RichText> for FieldValue {
    fn from(rich: RichText) -> Self {
        Self::Rich(rich)
    }
}

/// The per-call bundle of field name, bound value, and owning record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    value: FieldValue,
    object: Option<String>,
    errors: Vec<String>,
}

impl Field {
    /// Create a descriptor for a named field.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Missing,
            object: None,
            errors: Vec::new(),
        }
    }

    /// Bind a value.
    #[must_use]
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Name the owning record, as shown in confirmation prompts.
    #[must_use]
    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Attach a validation message from the owning record.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// The submission name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value.
    #[must_use]
    pub const fn get_value(&self) -> &FieldValue {
        &self.value
    }

    /// The owning record's display label.
    #[must_use]
    pub fn get_object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    /// Validation messages carried by the owning record.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the owning record reported no errors for this field.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human label derived from the name: `home_fax` becomes `Home fax`,
    /// and a trailing `_id` is dropped.
    #[must_use]
    pub fn label_text(&self) -> String {
        humanize(&self.name)
    }

    /// DOM id derived from the name: `user[email]` becomes `user_email`.
    #[must_use]
    pub fn tag_id(&self) -> String {
        sanitize_id(&self.name)
    }
}

fn humanize(name: &str) -> String {
    let base = name.strip_suffix("_id").unwrap_or(name);
    let mut out = String::with_capacity(base.len());
    for word in base
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if out.is_empty() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out
}

fn sanitize_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}
