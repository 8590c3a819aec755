//! Renderer implementations for the Formular view-helper library.
//!
//! Three families of helpers, all producing [`formular_core::Markup`]:
//! - [`inputs`] — form controls behind the [`inputs::FormInput`] contract
//! - [`rows`] — read-only table rows behind [`rows::TableRow`]
//! - [`icons`] — inline SVG icons and icon links

pub mod icons;
pub mod inputs;
pub mod rows;

pub use icons::{icon, icon_to};
pub use inputs::{
    ArticleEditor, CheckBox, Clear, EmailCcField, Facets, FormInput, InputState, InputVariant,
    Layout, PhoneField, RemoteLinkTo,
};
pub use rows::{Boolean, PercentField, RowVariant, TableRow};
