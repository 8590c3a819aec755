//! HTML-safe markup fragments.
//!
//! [`Markup`] is the return type of every renderer in this workspace: an
//! HTML string whose escaping obligations have already been discharged.
//! Plain text enters through [`Markup::text`] (escaped); trusted fragments
//! enter through [`Markup::raw`].
//!
//! # Examples
//!
//! ```
//! use formular_core::Markup;
//!
//! let safe = Markup::text("1 < 2");
//! assert_eq!(safe.as_str(), "1 &lt; 2");
//!
//! let trusted = Markup::raw("<br>");
//! assert_eq!(trusted.as_str(), "<br>");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Escape the five HTML-significant characters.
///
/// Returns `Cow::Borrowed` when the input contains nothing to escape.
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    let first = input
        .bytes()
        .position(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''));
    let Some(first) = first else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// An HTML fragment that is safe to emit verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Create an empty fragment.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap an already-safe HTML string without escaping it.
    ///
    /// The caller vouches for the content. Everything produced by the tag
    /// builder is already safe; this is for literal markup only.
    #[must_use]
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Create a fragment from plain text, escaping it.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self(escape(text).into_owned())
    }

    /// Append another fragment.
    pub fn push(&mut self, other: Self) {
        self.0.push_str(&other.0);
    }

    /// Append plain text, escaping it.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    /// View the fragment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment, returning the underlying string.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check whether the fragment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Some(self)` when non-empty, `None` otherwise.
    ///
    /// Mirrors the "presence" idiom used by row renderers to decide
    /// between content and a placeholder.
    #[must_use]
    pub fn presence(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Self::empty();
        for fragment in iter {
            out.push(fragment);
        }
        out
    }
}

impl std::ops::Add for Markup {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.push(rhs);
        self
    }
}
