//! Formular: server-side HTML form, table, and icon rendering helpers.
//!
//! Each helper is a pure function from a field descriptor and a
//! configuration mapping to a markup fragment. Host capabilities — asset
//! paths, formatters, SVG embedding — are injected per call as a
//! [`ViewContext`].
//!
//! # Examples
//!
//! ```
//! use formular::{Config, DefaultContext, Field};
//! use formular::widgets::FormInput;
//! use serde_json::json;
//!
//! let field = Field::new("subscribe").value(true);
//! let config = Config::from_value(json!({"hint": "You can opt out later."}));
//! let html = FormInput::CheckBox.render(&field, config, &DefaultContext);
//!
//! assert!(html.as_str().contains(r#"type="checkbox""#));
//! assert!(html.as_str().contains("You can opt out later."));
//! ```

pub use formular_core::*;
pub use formular_widgets as widgets;
